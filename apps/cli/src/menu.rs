//! 交互式主菜单
//!
//! 两层循环：菜单选择 → 执行命令 → 回到菜单。命令失败只打印到
//! stderr，菜单循环继续；EOF 或选择 0 正常退出。

use std::io::{self, BufRead, Write};

use crate::command::{Command, IndexCommand, SearchCommand};
use crate::config::Config;
use crate::error::Result;

pub fn run(config: &Config) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    println!("\nText Search & Index Manager");

    loop {
        println!("\nChoose an option:");
        println!("1 - Index text files");
        println!("2 - Start search");
        println!("0 - Exit");
        print!("> ");
        io::stdout().flush()?;

        let mut choice = String::new();
        if input.read_line(&mut choice)? == 0 {
            break;
        }

        let command: Box<dyn Command> = match choice.trim() {
            "1" => Box::new(IndexCommand::new(config.clone())),
            "2" => Box::new(SearchCommand::new(config.clone())),
            "0" => {
                println!("\nClosing the program...");
                break;
            }
            _ => {
                println!("\nInvalid choice. Please enter 1, 2, or 0.");
                continue;
            }
        };

        if let Err(e) = command.execute() {
            eprintln!("Error: {e:#}");
        }
    }

    println!("Program terminated.");
    Ok(())
}
