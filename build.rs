#[cfg(target_os = "windows")]
fn main() {
    use winresource::WindowsResource;

    // res/rbikeshare.ico must exist before building on Windows
    let mut res = WindowsResource::new();
    res.set_icon("res/rbikeshare.ico")
        .set("FileDescription", "rBikeshare CLI")
        .set("ProductName", "rBikeshare")
        .set("OriginalFilename", "rbikeshare.exe")
        .set("FileVersion", env!("CARGO_PKG_VERSION"))
        .set("ProductVersion", env!("CARGO_PKG_VERSION"))
        .compile()
        .expect("Failed to embed icon resource");
}

#[cfg(not(target_os = "windows"))]
fn main() {}
