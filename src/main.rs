mod app;
mod event;
mod ui;

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use env_logger::Env;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use verbdrill::config::Config;
use verbdrill::session::{DisplayRequest, SessionEvent};
use verbdrill::words::list::append_entry;
use verbdrill::words::{Level, WordList};

use app::App;
use event::{AppEvent, EventHandler};
use ui::components::answer_card::AnswerCard;
use ui::components::conclusion::ConclusionCard;
use ui::components::presentation::Presentation;
use ui::components::progress_bar::CountdownBar;
use ui::components::quiz_card::QuizCard;
use ui::layout::{PageLayout, centered_rect, hint_line};
use ui::text_field::FieldAction;
use ui::theme::Theme;

#[derive(Parser)]
#[command(
    name = "verbdrill",
    version,
    about = "Terminal quiz for German strong and irregular verbs"
)]
struct Cli {
    #[arg(short, long, global = true, help = "Word list file (.txt) to use")]
    words: Option<PathBuf>,

    #[arg(short = 'n', long, help = "Number of verbs per session")]
    questions: Option<usize>,

    #[arg(short = 't', long, help = "Seconds per verb, 0 disables the timer")]
    time_limit: Option<u64>,

    #[arg(long, help = "Theme name")]
    theme: Option<String>,

    #[arg(long, help = "Log file for the quiz session")]
    log_file: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Validate a verb and append it to a word list file
    Add {
        infinitive: String,
        third_person: String,
        preterite: String,
        /// hat or ist
        auxiliary: String,
        participle: String,
        /// A1, A2, B1, B2, C1 or C2
        level: String,
    },
    /// Parse a word list and report how many verbs it holds per level
    Check,
    /// Write the effective configuration to the config file
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (mut config, config_err) = match Config::load() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };
    if let Some(words) = cli.words {
        config.word_list = Some(words);
    }
    if let Some(questions) = cli.questions {
        config.questions = questions;
    }
    if let Some(secs) = cli.time_limit {
        config.time_limit_secs = secs;
    }
    if let Some(theme) = cli.theme {
        config.theme = theme;
    }
    if let Some(log_file) = cli.log_file {
        config.log_file = log_file;
    }

    match cli.command {
        None => init_file_logging(Path::new(&config.log_file))?,
        Some(_) => init_stderr_logging(),
    }
    if let Some(e) = config_err {
        log::warn!(
            "could not read {}, using defaults: {e:#}",
            Config::config_path().display()
        );
    }

    match cli.command {
        None => run_quiz(config),
        Some(Command::Add {
            infinitive,
            third_person,
            preterite,
            auxiliary,
            participle,
            level,
        }) => {
            let Some(path) = config.word_list.as_deref() else {
                bail!("`add` needs a word list file: pass --words or set word_list in the config");
            };
            let fields = [
                infinitive,
                third_person,
                preterite,
                format!("{auxiliary} {participle}"),
                level,
            ];
            let verb = append_entry(path, &fields)?;
            println!("added to {}: {}", path.display(), verb.to_line());
            Ok(())
        }
        Some(Command::Check) => {
            let words = WordList::load(config.word_list.as_deref())?;
            println!("{}: {} verbs", words.source(), words.len());
            let counts = words.count_by_level();
            for level in Level::ALL {
                let n = counts.get(&level).copied().unwrap_or(0);
                println!("  {level}: {n}");
            }
            Ok(())
        }
        Some(Command::Config) => {
            let path = config.save()?;
            println!("wrote {}", path.display());
            Ok(())
        }
    }
}

fn init_file_logging(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn init_stderr_logging() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
}

fn run_quiz(config: Config) -> Result<()> {
    // Everything that can fail on bad input happens before raw mode.
    let words = WordList::load(config.word_list.as_deref())?;
    let theme = Theme::load(&config.theme).unwrap_or_else(|| {
        log::warn!(
            "theme {:?} not found, using the default (available: {})",
            config.theme,
            Theme::available_themes().join(", ")
        );
        Theme::default()
    });
    let theme: &'static Theme = Box::leak(Box::new(theme));
    let mut app = App::new(config, &words, theme)?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventHandler::new(Duration::from_millis(100));

    let result = run_app(&mut terminal, &mut app, &events);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        log::error!("quiz aborted: {err:#}");
    }
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
) -> Result<()> {
    loop {
        terminal.draw(|frame| render(frame, app))?;

        // Steady typing starves the idle tick, so the deadline is checked
        // before any key is handled.
        let event = events.next()?;
        app.tick(Instant::now());
        if let AppEvent::Key(key) = event {
            handle_key(app, key);
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') => return app.dispatch(SessionEvent::Quit),
            KeyCode::Char('r') => return app.dispatch(SessionEvent::Reset),
            _ => {}
        }
    }

    match app.page {
        DisplayRequest::Presentation => handle_presentation_key(app, key),
        DisplayRequest::Game { .. } => handle_game_key(app, key),
        DisplayRequest::Success { .. } | DisplayRequest::Failed { .. } => {
            handle_answer_key(app, key)
        }
        DisplayRequest::Conclusion { .. } => handle_conclusion_key(app, key),
    }
}

fn handle_presentation_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => app.dispatch(SessionEvent::Start),
        KeyCode::Char('q') | KeyCode::Esc => app.dispatch(SessionEvent::Quit),
        _ => {}
    }
}

fn handle_game_key(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Esc {
        return app.dispatch(SessionEvent::Quit);
    }
    match app.focused_field_mut().handle(key) {
        FieldAction::Edited => {}
        FieldAction::SwitchField => app.switch_field(),
        FieldAction::Submit => app.submit_answers(),
    }
}

fn handle_answer_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('n') => {
            app.dispatch(SessionEvent::Next)
        }
        KeyCode::Char('q') | KeyCode::Esc => app.dispatch(SessionEvent::Quit),
        _ => {}
    }
}

fn handle_conclusion_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('r') => app.dispatch(SessionEvent::Reset),
        KeyCode::Enter | KeyCode::Char('q') | KeyCode::Esc => app.dispatch(SessionEvent::Quit),
        _ => {}
    }
}

fn render(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let colors = &app.theme.colors;
    frame.render_widget(Block::default().style(Style::default().bg(colors.bg())), area);

    let layout = PageLayout::new(area);
    render_header(frame, app, layout.header);

    let hints: &[&str] = match &app.page {
        DisplayRequest::Presentation => {
            render_presentation(frame, app, layout.body);
            &["[Enter] Start", "[q] Quit"]
        }
        DisplayRequest::Game { infinitive, .. } => {
            render_game(frame, app, infinitive, layout.body);
            &["[Enter] Submit", "[Tab] Switch field", "[Ctrl-R] Restart", "[Esc] Quit"]
        }
        DisplayRequest::Success { verb } => {
            let card = centered_rect(56, 10, layout.body);
            frame.render_widget(AnswerCard::new(verb, true, app.theme), card);
            &["[Enter] Next", "[Ctrl-R] Restart", "[q] Quit"]
        }
        DisplayRequest::Failed { verb } => {
            let card = centered_rect(56, 10, layout.body);
            frame.render_widget(AnswerCard::new(verb, false, app.theme), card);
            &["[Enter] Next", "[Ctrl-R] Restart", "[q] Quit"]
        }
        DisplayRequest::Conclusion { score, grade } => {
            let card = centered_rect(56, 11, layout.body);
            frame.render_widget(ConclusionCard::new(*score, *grade, app.theme), card);
            &["[r] Play again", "[q] Close"]
        }
    };

    let footer = Paragraph::new(Line::from(Span::styled(
        hint_line(hints, layout.footer.width as usize),
        Style::default().fg(colors.text_dim()),
    )));
    frame.render_widget(footer, layout.footer);
}

fn render_header(frame: &mut ratatui::Frame, app: &App, area: ratatui::layout::Rect) {
    let colors = &app.theme.colors;
    let style = Style::default().fg(colors.header_fg()).bg(colors.header_bg());

    let status = match &app.page {
        DisplayRequest::Game {
            remaining, score, ..
        } => format!(
            "Verb {}/{}  Remaining {remaining}  Score {score} ",
            app.session.state().used_count(),
            app.session.max_game()
        ),
        _ => format!("{} ", app.source),
    };

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(status.chars().count() as u16)])
        .split(area);

    let title = Paragraph::new(Line::from(Span::styled(
        " Starke Verben",
        style.add_modifier(Modifier::BOLD),
    )))
    .style(style);
    frame.render_widget(title, columns[0]);
    frame.render_widget(Paragraph::new(status).style(style), columns[1]);
}

fn render_presentation(frame: &mut ratatui::Frame, app: &App, area: ratatui::layout::Rect) {
    let card = centered_rect(72, 22, area);
    frame.render_widget(
        Presentation::new(app.session.max_game(), app.config.time_limit_secs, app.theme),
        card,
    );
}

fn render_game(
    frame: &mut ratatui::Frame,
    app: &App,
    infinitive: &str,
    area: ratatui::layout::Rect,
) {
    let card = centered_rect(60, 14, area);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(11), Constraint::Length(3)])
        .split(card);

    frame.render_widget(
        QuizCard::new(infinitive, &app.preterite, &app.perfect, app.focus, app.theme),
        rows[0],
    );

    if app.countdown.is_armed() {
        let now = Instant::now();
        frame.render_widget(
            CountdownBar::new(
                app.countdown.remaining(now),
                app.countdown.remaining_ratio(now),
                app.theme,
            ),
            rows[1],
        );
    }
}
