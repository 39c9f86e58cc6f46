//! The `triviaquiz play` command.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use comfy_table::{Cell, Table};

use triviaquiz_core::error::{FetchFailure, QuizError};
use triviaquiz_core::model::{AnswerReview, GameState, Score};
use triviaquiz_core::session::{Progress, SessionController, SessionObserver};

/// Where the quiz is drawn. Shared with the observer so state-change
/// notices land in the same stream as the questions.
type Screen = Arc<Mutex<dyn Write + Send>>;

const INTRO: &str = "10 question quiz. Give it your best shot!";

fn say(screen: &Screen, text: &str) -> io::Result<()> {
    let mut out = screen.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    writeln!(out, "{text}")?;
    out.flush()
}

fn prompt(screen: &Screen, text: &str) -> io::Result<()> {
    let mut out = screen.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    write!(out, "{text}")?;
    out.flush()
}

/// Renders session notifications.
struct ConsoleObserver {
    screen: Screen,
}

impl SessionObserver for ConsoleObserver {
    fn on_state_changed(&self, _from: GameState, to: GameState) {
        if to == GameState::Loading {
            let _ = say(&self.screen, "Loading...");
        }
    }

    fn on_fetch_error(&self, error: &FetchFailure) {
        let _ = say(&self.screen, &format!("Could not load questions: {error}"));
    }
}

pub async fn execute(endpoint: Option<String>, config_path: Option<PathBuf>) -> Result<()> {
    let provider = super::resolve_provider(endpoint, config_path)?;
    let screen: Screen = Arc::new(Mutex::new(io::stdout()));

    let mut controller = SessionController::new(Arc::from(provider));
    controller.subscribe(Arc::new(ConsoleObserver {
        screen: Arc::clone(&screen),
    }));

    let mut input = io::stdin().lock();
    play(&mut controller, &mut input, &screen).await
}

/// Run games until the player quits or input ends.
async fn play<R: BufRead>(
    controller: &mut SessionController,
    input: &mut R,
    screen: &Screen,
) -> Result<()> {
    loop {
        say(screen, INTRO)?;
        prompt(screen, "Press Enter to start (q to quit): ")?;
        let Some(line) = read_line(input)? else {
            return Ok(());
        };
        if line.trim().eq_ignore_ascii_case("q") {
            return Ok(());
        }

        match controller.start().await {
            Ok(()) => {}
            // The observer has already reported it; offer another go.
            Err(QuizError::Fetch(_)) => continue,
            Err(e) => return Err(e).context("failed to start quiz"),
        }

        let Some(score) = ask_questions(controller, input, screen)? else {
            return Ok(());
        };

        say(screen, "")?;
        say(screen, &score.to_string())?;
        say(screen, &review_table(controller.review()).to_string())?;

        prompt(screen, "Play again? [y/N]: ")?;
        match read_line(input)? {
            Some(answer) if answer.trim().eq_ignore_ascii_case("y") => {}
            _ => return Ok(()),
        }
    }
}

/// Ask every question of the current game. `None` when input ends first.
fn ask_questions<R: BufRead>(
    controller: &mut SessionController,
    input: &mut R,
    screen: &Screen,
) -> Result<Option<Score>> {
    loop {
        let question = controller
            .current_question()
            .cloned()
            .ok_or(QuizError::NoActiveQuestion)?;
        let number = controller.current_index().unwrap_or_default() + 1;
        let total = controller.question_count();
        let options = controller.present_options().unwrap_or_default();

        say(screen, "")?;
        say(screen, &format!("{number} / {total}"))?;
        if let Some(label) = heading(question.category.as_deref(), question.difficulty.as_deref())
        {
            say(screen, &label)?;
        }
        say(screen, &format!("{number}. {}", question.text))?;
        for (i, option) in options.iter().enumerate() {
            say(screen, &format!("  {}) {option}", i + 1))?;
        }

        let progress = loop {
            prompt(screen, &format!("Your answer [1-{}]: ", options.len()))?;
            let Some(line) = read_line(input)? else {
                return Ok(None);
            };
            let Some(choice) = parse_choice(&line, options.len()) else {
                say(
                    screen,
                    &format!("Please choose an option between 1 and {}.", options.len()),
                )?;
                continue;
            };
            match controller.submit_answer(&options[choice]) {
                Ok(progress) => break progress,
                Err(QuizError::EmptySelection) => {
                    say(screen, "That option is blank, please choose another.")?;
                }
                Err(e) => return Err(e).context("failed to submit answer"),
            }
        };

        if let Progress::Finished(score) = progress {
            return Ok(Some(score));
        }
    }
}

/// Read one line, `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

/// Turn a 1-based option number into an index.
fn parse_choice(line: &str, count: usize) -> Option<usize> {
    match line.trim().parse::<usize>() {
        Ok(n) if (1..=count).contains(&n) => Some(n - 1),
        _ => None,
    }
}

fn heading(category: Option<&str>, difficulty: Option<&str>) -> Option<String> {
    match (category, difficulty) {
        (Some(c), Some(d)) => Some(format!("[{c}, {d}]")),
        (Some(label), None) | (None, Some(label)) => Some(format!("[{label}]")),
        (None, None) => None,
    }
}

fn review_table(review: &[AnswerReview]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["#", "Question", "Your answer", "Correct answer", ""]);

    for (i, row) in review.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&row.question),
            Cell::new(&row.given),
            Cell::new(&row.correct),
            Cell::new(if row.is_correct { "correct" } else { "wrong" }),
        ]);
    }

    table
}
