pub fn version() {
    println!("mssqlbuild {}", env!("CARGO_PKG_VERSION"));
}
