use crossterm::event::{self, Event, KeyCode};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ponzilab::build_info;
use ponzilab::core::constants::*;
use ponzilab::core::engine::{RoundResult, Simulation};
use ponzilab::ui::{self, education_scene::EducationScene, tree_scene::TreeScene, Tab};
use rand::Rng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::collections::VecDeque;
use std::io;
use std::time::{Duration, Instant};

fn main() -> io::Result<()> {
    // Handle CLI arguments
    let args: Vec<String> = std::env::args().collect();
    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!(
                    "ponzilab {} ({})",
                    build_info::BUILD_DATE,
                    build_info::BUILD_COMMIT
                );
                return Ok(());
            }
            "--help" | "-h" => {
                println!("PonziLab - Terminal-Based Ponzi Scheme Simulator\n");
                println!("Usage: ponzilab\n");
                println!("Options:");
                println!("  --version  Show version information");
                println!("  --help     Show this help message");
                println!("\nRun the 'simulate' binary for headless collapse analysis.");
                return Ok(());
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'ponzilab --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal);

    // Restore terminal even when the loop errored
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;

    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    let mut engine = Simulation::new();
    let mut tab = Tab::Home;
    let mut tree_scene = TreeScene::new();
    let mut education_scene = EducationScene::new();
    let mut feed: VecDeque<String> = VecDeque::with_capacity(ACTIVITY_FEED_CAPACITY);
    let mut last_auto_round = Instant::now();

    push_feed(
        &mut feed,
        "Welcome to PonziLab. Press 'a' on the Simulator screen to recruit.".to_string(),
    );

    loop {
        terminal.draw(|frame| {
            ui::draw_ui(
                frame,
                tab,
                engine.state(),
                &feed,
                &tree_scene,
                &education_scene,
            );
        })?;

        // Auto-run: one round every AUTO_RUN_INTERVAL_MS while the flag is
        // set. The engine drops the flag itself when the scheme collapses.
        if engine.state().auto_run
            && last_auto_round.elapsed() >= Duration::from_millis(AUTO_RUN_INTERVAL_MS)
        {
            let count = rand::thread_rng().gen_range(AUTO_RUN_MIN_JOINERS..=AUTO_RUN_MAX_JOINERS);
            run_round(&mut engine, count, &mut feed);
            last_auto_round = Instant::now();
        }

        if event::poll(Duration::from_millis(EVENT_POLL_MS))? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('q') => break,
                    KeyCode::Tab => tab = tab.next(),
                    KeyCode::BackTab => tab = tab.prev(),
                    KeyCode::Char('1') => tab = Tab::Home,
                    KeyCode::Char('2') => tab = Tab::Simulator,
                    KeyCode::Char('3') => tab = Tab::Tree,
                    KeyCode::Char('4') => tab = Tab::Education,
                    code => handle_scene_key(
                        code,
                        tab,
                        &mut engine,
                        &mut tree_scene,
                        &mut education_scene,
                        &mut feed,
                        &mut last_auto_round,
                    ),
                }
            }
        }
    }

    Ok(())
}

fn handle_scene_key(
    code: KeyCode,
    tab: Tab,
    engine: &mut Simulation,
    tree_scene: &mut TreeScene,
    education_scene: &mut EducationScene,
    feed: &mut VecDeque<String>,
    last_auto_round: &mut Instant,
) {
    match tab {
        Tab::Simulator => match code {
            KeyCode::Char('a') => run_round(engine, 1, feed),
            KeyCode::Char('A') => run_round(engine, 3, feed),
            KeyCode::Char(' ') => {
                if engine.state().auto_run {
                    engine.set_auto_run(false);
                    push_feed(feed, "Auto-run stopped.".to_string());
                } else {
                    engine.set_auto_run(true);
                    if engine.state().auto_run {
                        *last_auto_round = Instant::now();
                        push_feed(feed, "Auto-run started.".to_string());
                    } else {
                        push_feed(
                            feed,
                            "The scheme has collapsed. Reset to continue.".to_string(),
                        );
                    }
                }
            }
            KeyCode::Char('r') => {
                engine.reset();
                tree_scene.select_founder();
                push_feed(feed, "Simulation reset to the founder.".to_string());
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                adjust_amount(engine, INVESTMENT_STEP, feed)
            }
            KeyCode::Char('-') => adjust_amount(engine, -INVESTMENT_STEP, feed),
            _ => {}
        },
        Tab::Tree => match code {
            KeyCode::Down => tree_scene.select_next(engine.state()),
            KeyCode::Up => tree_scene.select_prev(),
            KeyCode::PageDown => tree_scene.page_down(engine.state()),
            KeyCode::PageUp => tree_scene.page_up(),
            KeyCode::Home => tree_scene.select_founder(),
            _ => {}
        },
        Tab::Education => match code {
            KeyCode::Right => education_scene.next_section(),
            KeyCode::Left => education_scene.prev_section(),
            KeyCode::Down => education_scene.scroll_down(),
            KeyCode::Up => education_scene.scroll_up(),
            _ => {}
        },
        Tab::Home => {}
    }
}

/// Run one round and narrate the outcome into the activity feed.
fn run_round(engine: &mut Simulation, count: u32, feed: &mut VecDeque<String>) {
    let result = engine.add_investors(count, &mut rand::thread_rng());
    report_round(feed, &result);
}

fn report_round(feed: &mut VecDeque<String>, result: &RoundResult) {
    if let Some(rejection) = result.rejection {
        push_feed(feed, rejection.message().to_string());
        return;
    }

    let plural = if result.investors_paid == 1 { "" } else { "s" };
    push_feed(
        feed,
        format!(
            "Round {}: {} joined (+{}), {} paid to {} investor{}.",
            result.round,
            result.joined,
            ui::money(result.new_money),
            ui::money(result.distributed),
            result.investors_paid,
            plural
        ),
    );

    if let Some(reason) = result.collapse_reason {
        push_feed(
            feed,
            format!("THE SCHEME COLLAPSED: {}.", reason.describe()),
        );
    }
}

fn adjust_amount(engine: &mut Simulation, delta: f64, feed: &mut VecDeque<String>) {
    let current = engine.state().investment_amount;
    let next = (current + delta).clamp(MIN_INVESTMENT, MAX_INVESTMENT);
    if next != current && engine.set_investment_amount(next) {
        push_feed(
            feed,
            format!("Investment amount set to {}.", ui::money(next)),
        );
    }
}

fn push_feed(feed: &mut VecDeque<String>, entry: String) {
    if feed.len() >= ACTIVITY_FEED_CAPACITY {
        feed.pop_back();
    }
    feed.push_front(entry);
}
