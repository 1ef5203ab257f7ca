//! Weather widget - fetch current weather by city name or IP geolocation

use std::cell::RefCell;
use std::io;
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode,
    },
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tui_dispatch::{
    EffectContext, EffectStoreLike, EffectStoreWithMiddleware, EventKind, EventOutcome,
    RenderContext, TaskKey,
};
use tui_dispatch_debug::debug::DebugLayer;
use tui_dispatch_debug::{
    DebugCliArgs, DebugRunOutput, DebugSession, DebugSessionError, ReplayItem,
};
use weather_widget::action::Action;
use weather_widget::api::WeatherClient;
use weather_widget::assets;
use weather_widget::components::banner::TITLE;
use weather_widget::components::{Component, WeatherDisplay, WeatherDisplayProps};
use weather_widget::config::{self, ClientConfig};
use weather_widget::effect::Effect;
use weather_widget::logging;
use weather_widget::reducer::reducer;
use weather_widget::state::AppState;

/// Weather widget - current conditions from OpenWeather
#[derive(Parser, Debug)]
#[command(name = "weather-widget")]
#[command(about = "Fetch current weather for a typed city or your IP location")]
struct Args {
    /// City to prefill and fetch on startup
    #[arg(long, short)]
    city: Option<String>,

    /// OpenWeather API key
    #[arg(long, env = "OPENWEATHER_API_KEY", hide_env_values = true)]
    api_key: String,

    /// Language code for weather descriptions
    #[arg(long, default_value = config::DEFAULT_LANG)]
    lang: String,

    /// Request timeout in seconds (minimum 1)
    #[arg(long, default_value_t = config::DEFAULT_TIMEOUT_SECS, value_parser = clap::value_parser!(u64).range(1..))]
    timeout_secs: u64,

    /// Weather endpoint
    #[arg(long, default_value = config::DEFAULT_WEATHER_URL)]
    weather_url: String,

    /// IP geolocation endpoint
    #[arg(long, default_value = config::DEFAULT_GEO_URL)]
    geo_url: String,

    /// Directory holding banner.txt (defaults to the bundled or ./assets directory)
    #[arg(long)]
    assets_dir: Option<PathBuf>,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,

    #[command(flatten)]
    debug: DebugCliArgs,
}

impl Args {
    fn client_config(&self) -> ClientConfig {
        ClientConfig::new(self.api_key.clone())
            .with_lang(self.lang.clone())
            .with_weather_url(self.weather_url.clone())
            .with_geo_url(self.geo_url.clone())
            .with_timeout(Duration::from_secs(self.timeout_secs))
    }
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let args = Args::parse();
    logging::init(args.log_file.as_deref())?;

    let client = WeatherClient::new(args.client_config())
        .map_err(|e| io::Error::other(format!("http client error: {e}")))?;

    let resolver = assets::select_resolver(args.assets_dir.clone());
    let banner = assets::load_banner(resolver.as_ref());

    let Args {
        city,
        debug: debug_args,
        ..
    } = args;
    let fetch_on_start = city.is_some();

    let debug = DebugSession::new(debug_args);

    // Export JSON schemas if requested
    debug.save_state_schema::<AppState>().map_err(debug_error)?;
    debug.save_actions_schema::<Action>().map_err(debug_error)?;

    let state = debug
        .load_state_or_else_async(move || async move {
            let state = AppState::new(city.unwrap_or_default()).with_banner(banner);
            Ok::<AppState, io::Error>(state)
        })
        .await
        .map_err(debug_error)?;

    let replay_actions = debug.load_replay_items().map_err(debug_error)?;

    let (middleware, action_recorder) = debug.middleware_with_recorder();
    let store = EffectStoreWithMiddleware::new(state, reducer, middleware);

    // ===== Terminal setup =====
    let use_alt_screen = debug.use_alt_screen();
    let mut stdout = io::stdout();
    if use_alt_screen {
        enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture, SetTitle(TITLE))?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let initial_action = fetch_on_start.then_some(Action::WeatherFetch);
    let result = run_app(&mut terminal, &debug, store, replay_actions, initial_action, client).await;

    // ===== Cleanup =====
    if use_alt_screen {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
    }

    let run_output = result?;
    run_output.write_render_output()?;
    debug
        .save_actions(action_recorder.as_ref())
        .map_err(debug_error)?;

    Ok(())
}

fn debug_error(error: DebugSessionError) -> io::Error {
    io::Error::other(format!("debug session error: {error}"))
}

fn handle_ui_event(
    display: &mut WeatherDisplay,
    event: &EventKind,
    state: &AppState,
) -> EventOutcome<Action> {
    if let EventKind::Resize(_, _) = event {
        return EventOutcome::ignored().with_render();
    }
    let props = WeatherDisplayProps {
        state,
        is_focused: true,
    };
    EventOutcome::from_actions(display.handle_event(event, props))
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    debug: &DebugSession,
    store: impl EffectStoreLike<AppState, Action, Effect>,
    replay_actions: Vec<ReplayItem<Action>>,
    initial_action: Option<Action>,
    client: WeatherClient,
) -> io::Result<DebugRunOutput<AppState>> {
    let ui = Rc::new(RefCell::new(WeatherDisplay::new()));
    let ui_events = Rc::clone(&ui);
    let client = Arc::new(client);

    debug
        .run_effect_app(
            terminal,
            store,
            DebugLayer::simple(),
            replay_actions,
            initial_action,
            Some(Action::Quit),
            |_runtime| {},
            move |frame, area, state, render_ctx: RenderContext| {
                let props = WeatherDisplayProps {
                    state,
                    is_focused: render_ctx.is_focused(),
                };
                ui.borrow_mut().render(frame, area, props);
            },
            move |event, state| -> EventOutcome<Action> {
                handle_ui_event(&mut ui_events.borrow_mut(), event, state)
            },
            |action| matches!(action, Action::Quit),
            move |effect, ctx| handle_effect(effect, ctx, Arc::clone(&client)),
        )
        .await
}

/// Handle effects by spawning tasks
fn handle_effect(effect: Effect, ctx: &mut EffectContext<Action>, client: Arc<WeatherClient>) {
    match effect {
        Effect::FetchWeather { city } => {
            ctx.tasks().cancel(&TaskKey::new("locate"));
            ctx.tasks().spawn("weather", async move {
                match client.fetch_weather(&city).await {
                    Ok(report) => Action::WeatherDidLoad(report),
                    Err(e) => {
                        tracing::warn!(%city, error = %e, "weather fetch failed");
                        Action::WeatherDidError(e)
                    }
                }
            });
        }
        Effect::LocateCity => {
            ctx.tasks().cancel(&TaskKey::new("weather"));
            ctx.tasks().spawn("locate", async move {
                match client.locate_city().await {
                    Ok(city) => Action::LocateDidLoad(city),
                    Err(e) => {
                        tracing::warn!(error = %e, "geolocation failed");
                        Action::LocateDidError(e)
                    }
                }
            });
        }
    }
}
