use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;
use std::str::FromStr;

// Reads the entire input from a file, or STDIN when `filename` is None or "-"
// Returns the text along with a printable name for the source
pub fn read_input(filename: Option<&PathBuf>) -> io::Result<(String, String)> {
    let mut text = String::new();
    match filename {
        Some(file) if file.as_os_str() != "-" => {
            File::open(file)?.read_to_string(&mut text)?;
            Ok((text, file.to_string_lossy().into()))
        }
        _ => {
            io::stdin().read_to_string(&mut text)?;
            Ok((text, "<stdin>".into()))
        }
    }
}

// Splits the input on whitespace and returns a Vec of parse::<T>() over the words
// Anything following a '#' on a line is a comment
pub fn parse_words<T>(text: &str) -> Result<Vec<T>, Box<dyn std::error::Error>>
where
    T: FromStr,
    <T as FromStr>::Err: 'static,
    <T as FromStr>::Err: std::error::Error,
{
    let mut values = vec![];
    for line in text.lines() {
        let data = match line.find('#') {
            Some(pos) => &line[..pos],
            None => line,
        };
        for word in data.split_whitespace() {
            values.push(word.parse::<T>()?);
        }
    }
    Ok(values)
}

// ==============================================================

// https://github.com/rust-lang/rust/issues/62569

// This should be called in cli apps
pub fn reset_sigpipe() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(target_family = "unix")]
    {
        use nix::sys::signal;

        unsafe {
            signal::signal(signal::Signal::SIGPIPE, signal::SigHandler::SigDfl)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_across_lines() {
        let words: Vec<u32> = parse_words("1 2\n3\t4\n\n  5  \n").unwrap();
        assert_eq!(words, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn comments_are_skipped() {
        let words: Vec<u32> = parse_words("# state\n10 # first\n20\n#30\n").unwrap();
        assert_eq!(words, [10, 20]);
    }

    #[test]
    fn bad_word_is_an_error() {
        assert!(parse_words::<u32>("1 two 3").is_err());
        assert!(parse_words::<u32>("4294967296").is_err());
    }

    #[test]
    fn reads_from_file() {
        let path = std::env::temp_dir().join(format!("general-read-words-{}.txt", std::process::id()));
        std::fs::write(&path, "7\n8 9\n").unwrap();
        let (text, name) = read_input(Some(&path)).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(name, path.to_string_lossy());
        assert_eq!(parse_words::<u32>(&text).unwrap(), [7, 8, 9]);
    }

    #[test]
    fn missing_file_is_an_error() {
        let path = PathBuf::from("/nonexistent/general/words.txt");
        assert!(read_input(Some(&path)).is_err());
    }
}
