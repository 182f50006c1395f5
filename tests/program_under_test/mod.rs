use super::paths::CODESCRIBE_PATH;
use std::io::{Read, Write};

/// A wrapper to run the codescribe program with some arguments. It provides
/// functions to write its stdin and to read output from stdout and stderr.
pub struct Codescribe {
    process: std::process::Child,
}

impl Drop for Codescribe {
    fn drop(&mut self) {
        if self.process.try_wait().unwrap().is_none() {
            eprintln!("Codescribe process left by test. Attempting to kill!");
            self.process.kill().unwrap();
            for _ in 0..100 {
                if self.process.try_wait().unwrap().is_some() {
                    eprintln!("Codescribe process killed successfully!");
                    return;
                }
                std::thread::sleep(std::time::Duration::from_millis(100));
            }
            eprintln!("Failed to kill codescribe process");
        }
    }
}

// Not all methods are used in all integration test files
#[allow(dead_code)]
impl Codescribe {
    /// Runs codescribe with the provided arguments
    pub fn run(options: &[&str]) -> Self {
        let process = std::process::Command::new(CODESCRIBE_PATH.as_path())
            .args(options)
            .stdin(std::process::Stdio::piped())
            .stdout(std::process::Stdio::piped())
            .stderr(std::process::Stdio::piped())
            .spawn()
            .expect("Should be able to run codescribe");
        Self { process }
    }

    /// Writes to the program's stdin
    pub fn write_stdin(&mut self, text: &str) {
        let stdin = self
            .process
            .stdin
            .as_mut()
            .expect("Codescribe stdin has already been closed");
        stdin
            .write_all(text.as_bytes())
            .expect("Could not write to codescribe stdin");
        stdin.flush().expect("Could not flush codescribe stdin");
    }

    /// Closes the program's stdin so it stops waiting for input
    pub fn close_stdin(&mut self) {
        self.process.stdin.take();
    }

    pub fn read_stdout(&mut self) -> Result<String, std::io::Error> {
        let mut stdout = self
            .process
            .stdout
            .take()
            .expect("Codescribe stdout has already been used");
        Self::read(&mut stdout, "stdout")
    }

    pub fn read_stderr(&mut self) -> Result<String, std::io::Error> {
        let mut stderr = self
            .process
            .stderr
            .take()
            .expect("Codescribe stderr has already been used");
        Self::read(&mut stderr, "stderr")
    }

    /// Reads the program's stdout and checks that it matches the expected
    /// text, otherwise it returns an error
    pub fn expect_stdout(&mut self, expected_text: &str) -> Result<(), std::io::Error> {
        let read_text = self.read_stdout()?;
        if read_text == expected_text {
            Ok(())
        } else {
            Err(std::io::Error::other(format!(
                "Expected to read:\n'{expected_text}'\nfrom stdout but read:\n'{read_text}'"
            )))
        }
    }

    /// Waits for the program to end and checks that nothing more can be read
    /// from its stdout and stderr
    pub fn wait(&mut self) -> std::process::ExitStatus {
        if let Some(mut stdout) = self.process.stdout.take() {
            let mut text = String::new();
            if stdout
                .read_to_string(&mut text)
                .expect("Could not convert left-overs on codescribe stdout to UTF-8")
                != 0
            {
                panic!("Nothing should be left on codescribe stdout, but found '{text}'");
            }
        }
        if let Some(mut stderr) = self.process.stderr.take() {
            let mut text = String::new();
            if stderr
                .read_to_string(&mut text)
                .expect("Could not convert left-overs on codescribe stderr to UTF-8")
                != 0
            {
                panic!("Nothing should be left on codescribe stderr, but found '{text}'");
            }
        }

        self.process
            .wait()
            .expect("Could not wait for codescribe process to exit")
    }

    fn read<R>(reader: &mut R, reader_name: &str) -> Result<String, std::io::Error>
    where
        R: Read,
    {
        let mut buffer = Vec::new();
        reader.read_to_end(&mut buffer)?;
        Ok(String::from_utf8(buffer).unwrap_or_else(|error| {
            panic!("Read from codescribe {reader_name} but could not convert to UTF-8: {error}")
        }))
    }
}
