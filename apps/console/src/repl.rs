//! Interactive loop standing in for the calculator window.
//!
//! Assistant replies arrive on runtime workers; they are forwarded over a
//! channel and printed by this loop, which is the only writer to `out`.

use std::io::Write;

use syscalc_core::{AssistantReply, CalculatorSession, ModuleKind};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;

const HELP: &str = "Commands:
  <input>          calculate with the active module
  :module <name>   switch module (basic, finance, engineering)
  :modules         list modules
  :ai [input]      ask the assistant about the input
  :history         show the operation log, newest first
  :help            show this help
  :quit            exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Calculate(String),
    SelectModule(String),
    Assist(Option<String>),
    History,
    Modules,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

pub fn parse_command(line: &str) -> Command {
    if line.is_empty() {
        return Command::Empty;
    }
    let Some(rest) = line.trim_start().strip_prefix(':') else {
        return Command::Calculate(line.to_string());
    };

    let (name, arg) = match rest.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (rest, ""),
    };
    let arg = (!arg.is_empty()).then(|| arg.to_string());

    match (name, arg) {
        ("module", Some(module)) => Command::SelectModule(module),
        ("modules", None) => Command::Modules,
        ("ai", arg) => Command::Assist(arg),
        ("history", None) => Command::History,
        ("help", None) => Command::Help,
        ("quit" | "q", None) => Command::Quit,
        _ => Command::Unknown(line.trim().to_string()),
    }
}

pub async fn run<R, W>(mut session: CalculatorSession, reader: R, mut out: W) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let (tx, mut rx) = mpsc::unbounded_channel::<AssistantReply>();
    let mut lines = reader.lines();
    let mut pending = 0usize;

    print_active_module(&session, &mut out)?;

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match parse_command(&line) {
                    Command::Empty => {}
                    Command::Quit => return Ok(()),
                    Command::Help => writeln!(out, "{}", HELP)?,
                    Command::Unknown(cmd) => writeln!(out, "Unknown command: {} (try :help)", cmd)?,
                    Command::Modules => {
                        for kind in ModuleKind::ALL {
                            writeln!(out, "  {:<12} {}", kind.key(), kind.display_name())?;
                        }
                    }
                    Command::SelectModule(name) => match session.set_active_module(&name) {
                        Ok(_) => print_active_module(&session, &mut out)?,
                        Err(e) => writeln!(out, "{}", e)?,
                    },
                    Command::Calculate(input) => {
                        session.set_input(input);
                        let outcome = session.calculate_active();
                        writeln!(out, "Result: {}", outcome.display_text)?;
                    }
                    Command::History => {
                        writeln!(out, "Operation log:")?;
                        for line in session.history().render() {
                            writeln!(out, "  {}", line)?;
                        }
                    }
                    Command::Assist(input) => {
                        if let Some(input) = input {
                            session.set_input(input);
                        }
                        if session.input().is_empty() {
                            writeln!(out, "AI: Enter data to analyze")?;
                            continue;
                        }
                        let tx = tx.clone();
                        drop(session.request_active_assistance(move |reply| {
                            // The loop may already be gone after :quit.
                            let _ = tx.send(reply);
                        }));
                        pending += 1;
                        writeln!(out, "AI is analyzing...")?;
                    }
                }
            }
            Some(reply) = rx.recv() => {
                pending -= 1;
                print_reply(&reply, &mut out)?;
            }
        }
    }

    // Input closed: deliver whatever the assistant still owes.
    while pending > 0 {
        let Some(reply) = rx.recv().await else { break };
        pending -= 1;
        print_reply(&reply, &mut out)?;
    }
    Ok(())
}

fn print_active_module(session: &CalculatorSession, out: &mut impl Write) -> anyhow::Result<()> {
    let module = session.active_module();
    writeln!(out, "Active module: {}", module.name())?;
    writeln!(out, "{}", module.hint())?;
    Ok(())
}

fn print_reply(reply: &AssistantReply, out: &mut impl Write) -> anyhow::Result<()> {
    if reply.superseded {
        writeln!(out, "AI Assistant (superseded by a newer request):")?;
    } else {
        writeln!(out, "AI Assistant:")?;
    }
    writeln!(out, "{}", reply.explanation)?;
    Ok(())
}
