// SPDX-License-Identifier: MPL-2.0
//! Build script for platform-specific resources.
//!
//! On Windows, this embeds the application icon into the executable
//! so it appears in the taskbar and file explorer.

fn main() {
    println!("cargo:rerun-if-changed=assets/i18n");

    #[cfg(target_os = "windows")]
    {
        let icon = std::path::Path::new("assets/branding/catalog_lens.ico");
        if icon.exists() {
            let mut res = winresource::WindowsResource::new();
            res.set_icon("assets/branding/catalog_lens.ico");
            if let Err(error) = res.compile() {
                println!("cargo:warning=Failed to compile Windows resources: {error}");
            }
        }
    }
}
