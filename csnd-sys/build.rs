use std::env;
use std::env::consts;
use std::path::{Path, PathBuf};

fn emit(dir: &Path) {
    println!("cargo:rustc-link-search=native={}", dir.display());
    println!("cargo:rustc-link-lib=csound64");
}

fn main() {
    let target = env::var("TARGET").unwrap();

    let dylib_name = if target.contains("windows") {
        "csound64.lib".to_owned()
    } else {
        format!("{}csound64{}", consts::DLL_PREFIX, consts::DLL_SUFFIX)
    };

    // The env var always wins so users can point at a custom build.
    if let Some(lib_dir) = env::var_os("CSOUND_LIB_DIR") {
        let lib_dir = Path::new(&lib_dir);
        if lib_dir.join(&dylib_name).exists() {
            emit(lib_dir);
            return;
        }
    }

    if !target.contains("windows") {
        let paths = [
            PathBuf::from("/usr/lib"),
            PathBuf::from("/usr/local/lib"),
            PathBuf::from("/usr/lib/x86_64-linux-gnu"),
        ];
        for path in paths.iter() {
            if path.join(&dylib_name).exists() {
                emit(path);
                return;
            }
        }
    }

    println!("cargo:warning=libcsound64 library not found in your system");
    println!("export the CSOUND_LIB_DIR env var with the path to the csound library, for example ");
    println!("export CSOUND_LIB_DIR=/usr/lib  ");
    panic!();
}
