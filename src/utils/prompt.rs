use std::io::{self, Write};

/// Ask until a non-empty line is entered. Returns `None` on end of input.
pub fn prompt_line(prompt: &str) -> io::Result<Option<String>> {
    let mut input = String::new();

    loop {
        input.clear();

        print!("{}", prompt);
        io::stdout().flush()?;

        if io::stdin().read_line(&mut input)? == 0 {
            return Ok(None);
        }

        match input.trim() {
            "" => continue,
            answer => return Ok(Some(answer.to_string())),
        }
    }
}
