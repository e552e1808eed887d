use std::env;
use std::fs;
use std::path::Path;

/// Prefijo de las variables que `DomConfig::from_env` lee con `option_env!`
const ENV_PREFIX: &str = "DOM_UTILS_";

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env");

    for name in ["DOM_UTILS_ENABLE_LOGGING", "DOM_UTILS_LOG_LEVEL", "DOM_UTILS_LOG_MODULE_PREFIX"] {
        println!("cargo:rerun-if-env-changed={}", name);
    }

    // Sin .env se usan los valores por defecto de DomConfig
    let env_file = Path::new(".env");
    let Ok(contents) = fs::read_to_string(env_file) else {
        return;
    };

    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        let value = value.trim().trim_matches('"');

        if !key.starts_with(ENV_PREFIX) {
            continue;
        }

        // El entorno real tiene prioridad sobre el archivo
        if env::var(key).is_err() {
            println!("cargo:rustc-env={}={}", key, value);
        }
    }
}
