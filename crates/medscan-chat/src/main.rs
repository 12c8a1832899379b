//! Plays the MedScan.AI landing page in the terminal, with the chat widget
//! as the only interactive part.

#[macro_use]
extern crate tracing;

use std::io::Write as _;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use medscan_chat::{DEFAULT_BASE_URL, Session, SessionBuilder};
use medscan_chat_model::Message;
use owo_colors::OwoColorize;
use tokio::io::{self, AsyncBufReadExt};
use tokio::select;
use tokio::sync::mpsc;
use tokio::time::sleep;

#[derive(Debug, Parser)]
#[command(version, about = "Chat with the MedScan.AI assistant")]
struct Args {
    /// JSON file with `{"trigger", "reply"}` entries, checked in order.
    #[arg(long, env = "MEDSCAN_KNOWLEDGE")]
    knowledge: Option<PathBuf>,

    /// Milliseconds the bot "types" before a reply shows up.
    #[arg(long, env = "MEDSCAN_TYPING_DELAY_MS", default_value_t = 500)]
    typing_delay_ms: u64,

    /// URL of the page hosting the widget.
    #[arg(long, env = "MEDSCAN_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,
}

enum SessionEvent {
    Idle,
    Message(Message),
    Navigated(String),
}

const BAR_CHAR: &str = "▎";

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();

    let mut builder = SessionBuilder::new()
        .with_base_url(args.base_url)
        .with_typing_delay(Duration::from_millis(args.typing_delay_ms))
        .on_idle({
            let event_tx = event_tx.clone();
            move || {
                event_tx.send(SessionEvent::Idle).ok();
            }
        })
        .on_message({
            let event_tx = event_tx.clone();
            move |msg| {
                event_tx.send(SessionEvent::Message(msg.clone())).ok();
            }
        })
        .on_navigate({
            let event_tx = event_tx.clone();
            move |url| {
                event_tx.send(SessionEvent::Navigated(url.to_string())).ok();
            }
        });
    if let Some(path) = args.knowledge {
        builder = builder.with_knowledge_file(path);
    }
    // Only the widget's callbacks hold senders from here on.
    drop(event_tx);
    let session = match builder.build() {
        Ok(session) => session,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    println!("{}", "MedScan.AI".bright_cyan().bold());
    println!(
        "{}",
        "/toggle opens the chat, /reset starts over, /export dumps it, \
         /quit leaves."
            .dimmed()
    );

    let progress_style = ProgressStyle::with_template("{spinner} {wide_msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏");

    loop {
        print!("> ");
        std::io::stdout().flush().ok();

        let Some(line) = read_line().await else {
            break;
        };
        let line = line.trim();

        match line {
            "" => continue,
            "/quit" => break,
            "/toggle" | "/open" => {
                session.toggle();
                print_settled(&session, &mut event_rx).await;
                continue;
            }
            "/reset" => {
                session.reset();
                print_settled(&session, &mut event_rx).await;
                println!("{}", "Chat cleared.".dimmed());
                continue;
            }
            "/export" => {
                match session.snapshot().await {
                    Ok(snapshot) => {
                        println!("{}", snapshot.transcript.to_json());
                    }
                    Err(err) => error!("cannot export transcript: {err}"),
                }
                continue;
            }
            _ => {}
        }

        let open = session.snapshot().await.map(|s| s.open).unwrap_or(true);
        if !open {
            session.toggle();
        }
        session.send_message(line);

        if !wait_for_reply(&mut event_rx, &progress_style).await {
            break;
        }
    }

    ExitCode::SUCCESS
}

/// Prints whatever the widget produced for requests already sent.
async fn print_settled(
    session: &Session,
    event_rx: &mut mpsc::UnboundedReceiver<SessionEvent>,
) {
    // Once the snapshot is back, every earlier request has been handled.
    let open = session.snapshot().await.map(|s| s.open).unwrap_or(false);
    while let Ok(event) = event_rx.try_recv() {
        print_event(event);
    }
    if open {
        println!("{}", "(chat open)".dimmed());
    } else {
        println!("{}", "(chat closed)".dimmed());
    }
}

/// Shows a spinner until the reply arrives. Returns `false` if the widget
/// went away.
async fn wait_for_reply(
    event_rx: &mut mpsc::UnboundedReceiver<SessionEvent>,
    progress_style: &ProgressStyle,
) -> bool {
    let mut progress_bar = None;

    loop {
        progress_bar
            .get_or_insert_with(|| {
                let progress_bar = ProgressBar::new_spinner();
                progress_bar.set_style(progress_style.clone());
                progress_bar.set_message("typing...");
                progress_bar
            })
            .inc(1);

        let sleep = sleep(Duration::from_millis(100));
        let event = select! {
            event = event_rx.recv() => {
                let Some(event) = event else {
                    return false;
                };
                event
            },
            _ = sleep => {
                continue;
            }
        };

        // Finish the progress bar before printing anything else.
        if let Some(progress_bar) = progress_bar.take() {
            progress_bar.finish_and_clear();
        }

        if let SessionEvent::Idle = event {
            return true;
        }
        print_event(event);
    }
}

fn print_event(event: SessionEvent) {
    match event {
        SessionEvent::Message(msg) if msg.is_bot() => {
            println!(
                "{}🤖 {}",
                BAR_CHAR.bright_cyan(),
                msg.text().bright_white()
            );
        }
        SessionEvent::Message(_) => {}
        SessionEvent::Navigated(href) => {
            println!(
                "{}📍 {}",
                BAR_CHAR.bright_yellow(),
                href.bright_white().bold()
            );
        }
        SessionEvent::Idle => {}
    }
}

async fn read_line() -> Option<String> {
    let mut stdin = io::BufReader::new(io::stdin());
    let mut line = String::new();

    match stdin.read_line(&mut line).await {
        Ok(count) => {
            if count == 0 {
                return None;
            }
            Some(line)
        }
        Err(err) => {
            error!("error reading input: {}", err);
            None
        }
    }
}
