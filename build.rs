use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=assets");
    for var in [
        "SUPABASE_URL",
        "SUPABASE_ANON_KEY",
        "NEXT_PUBLIC_SUPABASE_URL",
        "NEXT_PUBLIC_SUPABASE_ANON_KEY",
    ] {
        println!("cargo:rerun-if-env-changed={var}");
    }

    if let Ok(output) = Command::new("git")
        .args(["describe", "--tags", "--abbrev=0"])
        .output()
    {
        if output.status.success() {
            if let Ok(tag) = String::from_utf8(output.stdout) {
                let tag = tag.trim();
                if !tag.is_empty() {
                    println!("cargo:rustc-env=GIT_TAG={tag}");
                }
            }
        }
    }
}
