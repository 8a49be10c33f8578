use std::io::{self, BufRead, Write};

use iquiz::{
    app_state::AppState,
    config::Config,
    errors::{AppError, AppResult},
    models::dto::payload_schema,
    services::{ContentService, QuizSession, SessionState},
};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();

    if let Err(e) = run().await {
        log::error!("{}", e);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> AppResult<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = args.first().map(String::as_str).unwrap_or("list");

    if command == "schema" {
        println!("{}", payload_schema()?);
        return Ok(());
    }

    let state = AppState::new(Config::from_env())?;
    let content = state.content_service.clone();
    content.restore_cached().await;

    let outcome = content.load(None).await;
    if let Some(notice) = outcome.notice() {
        eprintln!("{}", notice);
    }

    match command {
        "list" => {
            for subject in outcome.subjects.iter() {
                println!(
                    "{} ({} questions)\n    {}",
                    subject.title,
                    subject.question_count(),
                    subject.description
                );
            }
            Ok(())
        }
        "play" => {
            let title = args[1..].join(" ");
            play(&content, &title).await
        }
        other => Err(AppError::Configuration(format!(
            "unknown command '{}', expected list, play <title> or schema",
            other
        ))),
    }
}

async fn play(content: &ContentService, title: &str) -> AppResult<()> {
    let subject = content.find_subject(title).await.ok_or_else(|| {
        AppError::InvalidSessionPrecondition(format!("no subject titled '{}'", title))
    })?;
    let mut session = QuizSession::for_subject(&subject)?;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while let SessionState::AwaitingAnswer { index } = *session.state() {
        let Some(question) = session.current_question() else {
            break;
        };
        println!("\nQuestion {}/{}: {}", index + 1, session.total(), question.text);
        for (i, choice) in question.answer_choices.iter().enumerate() {
            println!("  {}) {}", i + 1, choice);
        }
        let correct_text = question.correct_choice().unwrap_or_default().to_string();

        print!("> ");
        io::stdout().flush().ok();
        let Some(Ok(line)) = lines.next() else {
            return Ok(());
        };
        let choice = match line.trim().parse::<usize>() {
            Ok(n) if n >= 1 => n - 1,
            _ => {
                println!("Enter a number from the list.");
                continue;
            }
        };

        match session.submit_answer(choice) {
            Ok(outcome) if outcome.correct => println!("Correct!"),
            Ok(_) => println!("Wrong, the answer was: {}", correct_text),
            Err(AppError::InvalidSessionPrecondition(msg)) => {
                println!("{}", msg);
                continue;
            }
            Err(e) => return Err(e),
        }
        println!("Score so far: {}/{}", session.score(), session.total());
        session.advance()?;
    }

    let final_score = session.final_score()?;
    println!("\nFinished: {} ({})", final_score, final_score.band());
    Ok(())
}
