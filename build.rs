fn main() {
    println!("cargo:rerun-if-env-changed=MICROWAVE_CONFIG_JSON");

    // ESP-IDF link arguments are only needed for firmware builds.
    #[cfg(feature = "espidf")]
    embuild::espidf::sysenv::output();
}
