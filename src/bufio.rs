use std::{
    fs::File,
    path::Path,
    io::{self, BufRead, BufReader},
};

use crate::error::{QuatError, QuatResult};

/// Takes a file path and returns an input file wrapped in a BufReader.
pub fn new_input_file(path: &Path) -> QuatResult<BufReader<File>> {
    match File::open(path) {
        Ok(file) => {
            Ok(BufReader::with_capacity(4096, file))
        }
        Err(err) => {
            Err(QuatError::FileOpen(path.to_path_buf(), err))
        }
    }
}

/// Reads the next whitespace-delimited token from the source, leaving
/// the source positioned at the whitespace that ended the token.
/// Returns None if the source is exhausted.
pub fn next_token<R: BufRead>(source: &mut R) -> io::Result<Option<String>> {
    let mut token = String::new();
    loop {
        let buf = source.fill_buf()?;
        if buf.is_empty() {
            break;
        }
        let mut used = 0;
        let mut done = false;
        for &byte in buf {
            if byte.is_ascii_whitespace() {
                if token.is_empty() {
                    used += 1;
                    continue;
                }
                done = true;
                break;
            }
            token.push(byte as char);
            used += 1;
        }
        source.consume(used);
        if done {
            break;
        }
    }
    if token.is_empty() {
        Ok(None)
    }
    else {
        Ok(Some(token))
    }
}


#[test]
fn next_token_test() {
    let mut source = "  1.5\n\t-2  ".as_bytes();
    assert!(next_token(&mut source).unwrap() == Some("1.5".to_string()));
    assert!(next_token(&mut source).unwrap() == Some("-2".to_string()));
    assert!(next_token(&mut source).unwrap() == None);
}
