use std::io::{self, BufRead, Write};

use search_core::{SearchHit, SearchSession};

use super::Command;
use crate::config::Config;
use crate::error::{Result, WrapErr, error};

pub struct SearchCommand {
    config: Config,
}

impl SearchCommand {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

impl Command for SearchCommand {
    fn execute(&self) -> Result<()> {
        let session = SearchSession::open(&self.config.index_path, self.config.number_of_results)
            .map_err(|e| error!("Open index error: {e:#}"))?;

        println!(
            "\nInsert query (e.g. name:term or content:query or content:\"phrase query\")"
        );
        println!("Type exit to quit\n");

        let stdin = io::stdin();
        let mut input = stdin.lock();

        loop {
            print!("> ");
            io::stdout().flush()?;

            let mut line = String::new();
            // EOF 等价于 exit
            if input.read_line(&mut line)? == 0 {
                println!();
                break;
            }
            if is_exit_line(&line) {
                println!("exiting...\n");
                break;
            }

            match session.query(&line) {
                Ok(hits) => print_hits(&hits),
                Err(e) if e.is_recoverable() => println!("{e}\n"),
                Err(e) => return Err(e).wrap_err("Search session aborted"),
            }
        }

        Ok(())
    }
}

fn is_exit_line(line: &str) -> bool {
    line.trim().eq_ignore_ascii_case("exit")
}

fn print_hits(hits: &[SearchHit]) {
    if hits.is_empty() {
        println!("No matching documents\n");
        return;
    }
    for (i, hit) in hits.iter().enumerate() {
        println!(
            "{}. {} (score: {:.2})\n{}\n",
            i + 1,
            hit.name,
            hit.score,
            hit.content.trim_end()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_is_case_insensitive_and_trimmed() {
        assert!(is_exit_line("exit"));
        assert!(is_exit_line("  EXIT  \n"));
        assert!(is_exit_line("Exit\r\n"));
        assert!(!is_exit_line("exit now"));
        assert!(!is_exit_line("name:exit"));
    }
}
