//! Subcommand implementations.
//!
//! Every command writes its result to `out` and returns whether it
//! succeeded; only `validate` can fail without an error.

use atelier_common::{AtelierError, Lookup, Result};
use atelier_config::{AtelierConfig, FileSettingsStore, NoSettings, SettingsStore};
use atelier_themes::{
    list_themes, load_context, ActiveThemeResolver, FileResolver, FsThemeStore, OverrideCookies,
    RequestSignals, ResolutionContext, ThemeValidator,
};
use serde::Serialize;
use std::io::Write;
use tracing::debug;

use crate::cli::{Command, LocateKind};
use crate::render;

/// Loaded configuration and the store it points at.
pub struct Workspace {
    pub config: AtelierConfig,
    pub store: FsThemeStore,
}

impl Workspace {
    pub fn new(config: AtelierConfig) -> Self {
        let store = FsThemeStore::new(&config.themes.root);
        Self { config, store }
    }

    fn settings(&self) -> Box<dyn SettingsStore> {
        match FileSettingsStore::from_config(&self.config.settings) {
            Some(store) => Box::new(store),
            None => Box::new(NoSettings),
        }
    }

    fn file_resolver(&self) -> FileResolver<'_, FsThemeStore> {
        FileResolver::new(&self.store)
            .with_extensions(self.config.themes.extensions.iter().cloned())
            .with_max_depth(self.config.themes.max_chain_depth as usize)
    }

    async fn context(&self, request: &RequestSignals) -> ResolutionContext {
        load_context(request, &self.config, self.settings().as_ref()).await
    }
}

pub async fn run(ws: &Workspace, command: Command, out: &mut dyn Write) -> Result<bool> {
    match command {
        Command::Validate { json } => {
            let root = ws.store.root();
            if !tokio::fs::try_exists(root).await? {
                return Err(AtelierError::Other(format!(
                    "themes directory {} does not exist",
                    root.display()
                )));
            }
            let report = ThemeValidator::from_config(&ws.store, &ws.config)
                .validate()
                .await?;
            emit(out, json, &report, || render::validation(&report))?;
            Ok(report.all_valid)
        }
        Command::List { json } => {
            let active = ActiveThemeResolver::from_config(&ws.store, &ws.config)
                .resolve(&ws.context(&RequestSignals::new()).await)
                .await;
            let entries = list_themes(&ws.store, &active.slug).await?;
            emit(out, json, &entries, || render::listing(&entries))?;
            Ok(true)
        }
        Command::Resolve {
            host,
            preview,
            session,
            persisted,
            json,
        } => {
            let cookies = OverrideCookies::from_config(&ws.config.signals);
            let request = request_signals(&cookies, host, preview, session);
            let mut ctx = ws.context(&request).await;
            if persisted.is_some() {
                ctx.persisted_default = persisted;
            }
            debug!(?ctx, "resolution context");
            let resolution = ActiveThemeResolver::from_config(&ws.store, &ws.config)
                .resolve(&ctx)
                .await;
            emit(out, json, &resolution, || render::resolution(&resolution))?;
            Ok(true)
        }
        Command::Chain { slug, json } => {
            let chain = ws.file_resolver().chain(&slug).await?;
            emit(out, json, &chain, || render::chain(&chain))?;
            Ok(true)
        }
        Command::Locate {
            slug,
            path,
            kind,
            json,
        } => {
            let resolver = ws.file_resolver();
            let lookup = match kind {
                LocateKind::File => resolver.resolve(&slug, &path).await?,
                LocateKind::Page => resolver.page(&slug, &path).await?,
                LocateKind::Layout => resolver.layout(&slug, &path).await?,
                LocateKind::Component => resolver.component(&slug, &path).await?,
            };
            let found = matches!(lookup, Lookup::Found(_));
            let file = lookup.found();
            emit(out, json, &file, || render::located(file.as_ref()))?;
            Ok(found)
        }
    }
}

/// Request signals carrying the given overrides as cookies.
fn request_signals(
    cookies: &OverrideCookies,
    host: Option<String>,
    preview: Option<String>,
    session: Option<String>,
) -> RequestSignals {
    let mut request = RequestSignals::new();
    request.host = host;
    let pairs: Vec<String> = [
        (cookies.preview_cookie(), preview),
        (cookies.session_cookie(), session),
    ]
    .into_iter()
    .filter_map(|(name, value)| value.map(|v| format!("{name}={v}")))
    .collect();
    if !pairs.is_empty() {
        request.cookie_header = Some(pairs.join("; "));
    }
    request
}

fn emit<T: Serialize>(
    out: &mut dyn Write,
    json: bool,
    value: &T,
    text: impl FnOnce() -> String,
) -> Result<()> {
    if json {
        let rendered = serde_json::to_string_pretty(value)
            .map_err(|e| AtelierError::Other(format!("failed to serialize output: {e}")))?;
        writeln!(out, "{rendered}")?;
    } else {
        write!(out, "{}", text())?;
    }
    Ok(())
}
