//! Voice list clicks

use crate::notify::Severity;
use crate::speech::Voice;
use crate::state::AppContext;
use crate::Result;
use log::{debug, info};

/// Apply the voice whose display name is `name`
///
/// Names are matched by linear scan and the first match wins. An unknown
/// name changes nothing and shows no dialog; `Ok(None)` is returned.
pub fn select_voice(ctx: &mut AppContext, name: &str) -> Result<Option<Voice>> {
    let Some(voice) = ctx.catalog.find_by_name(name).cloned() else {
        debug!("No voice named '{}' in the catalog", name);
        return Ok(None);
    };

    ctx.engine.set_voice(&voice)?;
    info!("Voice set to {} ({})", voice.name, voice.id);
    ctx.active_voice = Some(voice.clone());

    ctx.notifier.notify(
        "Voice set!",
        &format!("Voice set to {}", voice.name),
        Severity::Information,
    );

    Ok(Some(voice))
}
