// src/cli.rs
use crate::app::JobBoard;
use crate::core::{ConfigManager, ServiceClient};
use crate::jobs::JobId;
use crate::terminal::{ConsoleNotifier, TerminalChart};
use crate::utils::{parse_item_number, parse_item_numbers};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "jobboard")]
#[command(about = "Search job listings, save the ones worth keeping, see who is hiring")]
pub struct JobBoardCli {
    #[command(subcommand)]
    pub command: JobBoardCommand,

    /// Base URL of the job board API (overrides config and JOBBOARD_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,
}

#[derive(Subcommand)]
pub enum JobBoardCommand {
    /// Show saved jobs
    Saved,
    /// Search external listings and chart the hiring companies
    Search {
        keyword: String,
        /// Save these result numbers, e.g. "1,3"
        #[arg(long)]
        select: Option<String>,
    },
    /// Delete a saved job, then show what is left
    Delete { id: String },
    /// Interactive session
    Shell,
}

#[derive(Debug, PartialEq, Eq)]
pub enum ShellCommand {
    Search(String),
    Check(usize),
    Uncheck(usize),
    Save,
    Delete(JobId),
    Saved,
    Show,
    Help,
    Quit,
}

const SHELL_HELP: &str = "\
commands:
  search <keyword>   search external listings
  check <n>          select result n
  uncheck <n>        deselect result n
  save               save selected results
  delete <id>        delete a saved job
  saved              show saved jobs
  show               redraw the page
  help               this text
  quit               leave";

impl ShellCommand {
    /// Parse one input line. Blank lines yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        let command = match (verb.to_lowercase().as_str(), rest) {
            ("search", "") => anyhow::bail!("search needs a keyword"),
            ("search", keyword) => ShellCommand::Search(keyword.to_string()),
            ("check", n) => ShellCommand::Check(parse_item_number(n)?),
            ("uncheck", n) => ShellCommand::Uncheck(parse_item_number(n)?),
            ("save", _) => ShellCommand::Save,
            ("delete", "") => anyhow::bail!("delete needs a job id"),
            ("delete", id) => ShellCommand::Delete(JobId::from(id)),
            ("saved", _) => ShellCommand::Saved,
            ("show", _) => ShellCommand::Show,
            ("help", _) | ("?", _) => ShellCommand::Help,
            ("quit", _) | ("exit", _) => ShellCommand::Quit,
            (other, _) => anyhow::bail!("unknown command '{}', try 'help'", other),
        };
        Ok(Some(command))
    }
}

type TerminalBoard = JobBoard<TerminalChart>;

fn build_board(config: &ConfigManager) -> Result<TerminalBoard> {
    let client = Arc::new(ServiceClient::new(
        &config.service.api_url,
        config.service.timeout_seconds,
    )?);
    info!("Using job board API at {}", client.base_url());

    Ok(JobBoard::new(
        client.clone(),
        client,
        Arc::new(ConsoleNotifier),
        TerminalChart::default(),
    ))
}

fn draw(board: &TerminalBoard) {
    print!("{}", board.page().draw());
    if board.page().chart_visible() {
        println!();
        print!("{}", board.charts().draw());
    }
}

pub async fn handle_command(cli: JobBoardCli, mut config: ConfigManager) -> Result<()> {
    if let Some(api_url) = cli.api_url {
        config.service.api_url = api_url;
    }
    let mut board = build_board(&config)?;

    match cli.command {
        JobBoardCommand::Saved => {
            board.fetch_saved_jobs().await;
            draw(&board);
        }

        JobBoardCommand::Search { keyword, select } => {
            board.fetch_external_jobs(&keyword).await;
            if let Some(select) = select {
                for index in parse_item_numbers(&select)? {
                    board.set_checked(index, true)?;
                }
                draw(&board);
                board.save_selected().await?;
            } else {
                draw(&board);
            }
        }

        JobBoardCommand::Delete { id } => {
            board.delete_job(&JobId::from(id.as_str())).await;
            draw(&board);
        }

        JobBoardCommand::Shell => run_shell(&mut board).await?,
    }

    Ok(())
}

async fn run_shell(board: &mut TerminalBoard) -> Result<()> {
    board.fetch_saved_jobs().await;
    draw(board);
    println!("type 'help' for commands");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush().context("Failed to flush stdout")?;

        let Some(line) = lines.next_line().await.context("Failed to read input")? else {
            break;
        };

        let command = match ShellCommand::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        match command {
            ShellCommand::Search(keyword) => {
                board.fetch_external_jobs(&keyword).await;
                draw(board);
            }
            ShellCommand::Check(index) => set_checked(board, index, true),
            ShellCommand::Uncheck(index) => set_checked(board, index, false),
            ShellCommand::Save => {
                if let Err(e) = board.save_selected().await {
                    error!("Error saving jobs: {}", e);
                }
            }
            ShellCommand::Delete(id) => {
                board.delete_job(&id).await;
                draw(board);
            }
            ShellCommand::Saved => {
                board.fetch_saved_jobs().await;
                draw(board);
            }
            ShellCommand::Show => draw(board),
            ShellCommand::Help => println!("{}", SHELL_HELP),
            ShellCommand::Quit => break,
        }
    }

    Ok(())
}

fn set_checked(board: &mut TerminalBoard, index: usize, checked: bool) {
    match board.set_checked(index, checked) {
        Ok(()) => draw(board),
        Err(e) => println!("{}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_shell_commands() {
        assert_eq!(
            ShellCommand::parse("search  data analyst ").unwrap(),
            Some(ShellCommand::Search("data analyst".to_string()))
        );
        assert_eq!(ShellCommand::parse("check 2").unwrap(), Some(ShellCommand::Check(1)));
        assert_eq!(ShellCommand::parse("UNCHECK 1").unwrap(), Some(ShellCommand::Uncheck(0)));
        assert_eq!(
            ShellCommand::parse("delete 65f0c1").unwrap(),
            Some(ShellCommand::Delete(JobId::from("65f0c1")))
        );
        assert_eq!(ShellCommand::parse("save").unwrap(), Some(ShellCommand::Save));
        assert_eq!(ShellCommand::parse("exit").unwrap(), Some(ShellCommand::Quit));
        assert_eq!(ShellCommand::parse("   ").unwrap(), None);
    }

    #[test]
    fn test_parse_shell_errors() {
        assert!(ShellCommand::parse("search").is_err());
        assert!(ShellCommand::parse("check zero").is_err());
        assert!(ShellCommand::parse("check 0").is_err());
        assert!(ShellCommand::parse("delete").is_err());
        assert!(ShellCommand::parse("launch").is_err());
    }

    #[test]
    fn test_cli_parses_search_with_selection() {
        let cli = JobBoardCli::try_parse_from([
            "jobboard",
            "search",
            "ranger",
            "--select",
            "1,2",
            "--api-url",
            "http://127.0.0.1:3000",
        ])
        .unwrap();

        assert_eq!(cli.api_url.as_deref(), Some("http://127.0.0.1:3000"));
        match cli.command {
            JobBoardCommand::Search { keyword, select } => {
                assert_eq!(keyword, "ranger");
                assert_eq!(select.as_deref(), Some("1,2"));
            }
            _ => panic!("expected search"),
        }
    }
}
