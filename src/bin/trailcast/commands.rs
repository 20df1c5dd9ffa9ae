// ABOUTME: Command implementations for the trailcast CLI
// ABOUTME: Resolves settings precedence, locations, and runs show/search/watch/prefs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailcast Contributors

use crate::{Cli, Command, LocationArgs, PrefsCommand};
use std::env;
use std::io::{self, IsTerminal, Write};
use std::sync::Arc;
use trailcast::config::AppConfig;
use trailcast::dashboard::DashboardService;
use trailcast::errors::{AppError, AppResult};
use trailcast::formatters::{self, OutputFormat, RenderOptions};
use trailcast::models::{Activity, Location, UnitSystem};
use trailcast::preferences::{
    validate_refresh_minutes, PreferenceStore, Preferences, SettingOverrides, Settings,
};
use trailcast::providers::{initialize_shared_client, OpenMeteoProvider};
use trailcast::refresh::{self, RefreshLoop};
use tracing::{debug, info};

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Everything a command needs after settings are resolved
struct Context {
    store: PreferenceStore,
    preferences: Preferences,
    service: DashboardService,
    render: RenderOptions,
    settings: Settings,
}

impl Context {
    /// Apply precedence: command line, then preferences, then environment
    fn build(cli: &Cli) -> AppResult<Self> {
        let config = AppConfig::from_env()?;
        initialize_shared_client(config.http);

        let store = PreferenceStore::from_config(&config)?;
        let preferences = store.load();
        debug!(path = %store.path().display(), "Preferences loaded");

        let format = cli.format.unwrap_or_default();
        let color = !cli.no_color
            && format == OutputFormat::Text
            && env::var_os("NO_COLOR").is_none()
            && io::stdout().is_terminal();

        let overrides = SettingOverrides {
            units: cli.units,
            activity: cli.activity,
            refresh_minutes: match &cli.command {
                Command::Watch { interval, .. } => *interval,
                _ => None,
            },
        };
        let settings = preferences.resolve(overrides, &config);
        let provider = OpenMeteoProvider::new(config.open_meteo.clone());

        Ok(Self {
            render: RenderOptions {
                format,
                units: settings.units,
                color,
            },
            settings,
            service: DashboardService::new(Arc::new(provider)),
            store,
            preferences,
        })
    }

    /// Location from flags, falling back to the saved one
    async fn resolve_location(&self, target: &LocationArgs) -> AppResult<Location> {
        if let Some(location) = self.location_from_args(target).await? {
            return Ok(location);
        }
        self.preferences.location.clone().ok_or_else(|| {
            AppError::invalid_input(
                "No location given and none saved; pass --location or --lat/--lon, or run `trailcast prefs set --location NAME`",
            )
        })
    }

    async fn location_from_args(&self, target: &LocationArgs) -> AppResult<Option<Location>> {
        match (&target.location, target.lat, target.lon) {
            (Some(name), _, _) => self.service.resolve_location(name).await.map(Some),
            (None, Some(lat), Some(lon)) => Location::from_coordinates(lat, lon).map(Some),
            _ => Ok(None),
        }
    }
}

/// Dispatch a parsed command line
pub async fn run(cli: Cli) -> AppResult<()> {
    let context = Context::build(&cli)?;

    match cli.command {
        Command::Show { target } => show(&context, &target).await,
        Command::Search { query, limit } => search(&context, &query, limit).await,
        Command::Watch { target, .. } => watch(&context, &target).await,
        Command::Prefs { action } => match action {
            PrefsCommand::Show => prefs_show(&context),
            PrefsCommand::Set { target, interval } => {
                prefs_set(&context, cli.units, cli.activity, &target, interval).await
            }
            PrefsCommand::Clear => prefs_clear(&context),
        },
    }
}

async fn show(context: &Context, target: &LocationArgs) -> AppResult<()> {
    let location = context.resolve_location(target).await?;
    let dashboard = context.service.load(&location, context.settings.activity).await?;
    emit(&formatters::render_dashboard(&dashboard, context.render)?)
}

async fn search(context: &Context, query: &str, limit: u8) -> AppResult<()> {
    let locations = context.service.search(query, limit).await?;
    emit(&formatters::render_locations(
        query.trim(),
        &locations,
        context.render,
    )?)
}

async fn watch(context: &Context, target: &LocationArgs) -> AppResult<()> {
    let location = context.resolve_location(target).await?;
    let refresh_loop = RefreshLoop::from_minutes(context.settings.refresh_minutes);
    let clear = context.render.format == OutputFormat::Text && context.render.color;
    let location = &location;

    info!(
        location = %location.name,
        interval_secs = refresh_loop.interval().as_secs(),
        "Watching location"
    );

    let stats = refresh_loop
        .run(
            move || async move {
                let dashboard = context.service.load(location, context.settings.activity).await?;
                let rendered = formatters::render_dashboard(&dashboard, context.render)?;
                if clear {
                    emit(CLEAR_SCREEN)?;
                }
                emit(&rendered)
            },
            refresh::ctrl_c(),
        )
        .await;

    debug!(succeeded = stats.succeeded, failed = stats.failed, "Watch finished");
    Ok(())
}

fn prefs_show(context: &Context) -> AppResult<()> {
    match context.render.format {
        OutputFormat::Json => emit(&formatters::to_json(&context.preferences)?),
        OutputFormat::Text => {
            let preferences = &context.preferences;
            let unset = || "(not set)".to_owned();
            emit(&format!(
                "File:      {}\nLocation:  {}\nUnits:     {}\nActivity:  {}\nInterval:  {}\n",
                context.store.path().display(),
                preferences
                    .location
                    .as_ref()
                    .map_or_else(unset, Location::display_name),
                preferences
                    .units
                    .map_or_else(unset, |units| units.to_string()),
                preferences
                    .activity
                    .map_or_else(unset, |activity| activity.to_string()),
                preferences
                    .refresh_minutes
                    .map_or_else(unset, |minutes| format!("{minutes} min")),
            ))
        }
    }
}

/// Persist `--location`/`--lat`/`--lon`, the global `--units` and
/// `--activity` flags, and `--interval`
async fn prefs_set(
    context: &Context,
    units: Option<UnitSystem>,
    activity: Option<Activity>,
    target: &LocationArgs,
    interval: Option<u64>,
) -> AppResult<()> {
    let mut preferences = context.preferences.clone();
    let mut changed = false;

    if let Some(location) = context.location_from_args(target).await? {
        preferences.location = Some(location);
        changed = true;
    }
    if let Some(units) = units {
        preferences.units = Some(units);
        changed = true;
    }
    if let Some(activity) = activity {
        preferences.activity = Some(activity);
        changed = true;
    }
    if let Some(minutes) = interval {
        preferences.refresh_minutes = Some(validate_refresh_minutes(minutes)?);
        changed = true;
    }

    if !changed {
        return Err(AppError::invalid_input(
            "Nothing to set; pass --location, --lat/--lon, --units, --activity, or --interval",
        ));
    }

    context.store.save(&preferences)?;
    emit(&format!(
        "Saved preferences to {}\n",
        context.store.path().display()
    ))
}

fn prefs_clear(context: &Context) -> AppResult<()> {
    let message = if context.store.clear()? {
        "Preferences cleared\n"
    } else {
        "No saved preferences\n"
    };
    emit(message)
}

/// Write to stdout, ensuring a trailing newline
fn emit(text: &str) -> AppResult<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    if !text.is_empty() && !text.ends_with('\n') && text != CLEAR_SCREEN {
        stdout.write_all(b"\n")?;
    }
    stdout.flush()?;
    Ok(())
}
