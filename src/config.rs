use std::fmt;
use std::path::PathBuf;

use crate::error::{QuatError, QuatResult};


/// Parsing states.
enum Parse {
    None,
    InputPath,
}


/// User defined configuration settings.
#[derive(Clone, Debug, Default)]
pub struct Config {
    pub input: Option<PathBuf>,
    pub pairs: bool,
}
impl Config {
    /// Create a new Config with the specified command line arguments.
    pub fn new(args: Vec<String>) -> QuatResult<Config> {
        let mut parser = Parse::None;
        let mut cfg = Config::default();

        for arg in args.into_iter() {
            match arg.as_str() {
                "-in" => {
                    parser = Parse::InputPath;
                    continue;
                }
                "-pairs" => {
                    cfg.pairs = true;
                    continue;
                }
                _ => {},
            }
            match parser {
                Parse::InputPath => {
                    cfg.input = Some(PathBuf::from(&arg));
                    parser = Parse::None;
                }
                Parse::None => {
                    return Err(
                        QuatError::InvalidOption(arg.clone())
                    );
                }
            }
        }
        Ok(cfg)
    }
}
impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "
            \rInput: {}
            \rMode: {}",
            if let Some(path) = &self.input {
                path.display().to_string()
            }
            else {
                "stdin".to_string()
            },
            if self.pairs {
                "pairs"
            }
            else {
                "single"
            },
        )
    }
}


#[test]
fn config_test() {
    let args = vec!["-in".to_string(), "input.txt".to_string(), "-pairs".to_string()];
    let cfg = Config::new(args).unwrap();
    assert!(cfg.input == Some(PathBuf::from("input.txt")));
    assert!(cfg.pairs);
}

#[test]
fn config_default_test() {
    let cfg = Config::new(Vec::new()).unwrap();
    assert!(cfg.input.is_none());
    assert!(!cfg.pairs);
}

#[test]
fn config_invalid_test() {
    let args = vec!["-frobnicate".to_string()];
    assert!(Config::new(args).is_err());
}
