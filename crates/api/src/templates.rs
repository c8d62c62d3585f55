//! HTML templates for the diary pages.
//!
//! Templates are minijinja files under `crates/api/templates/`, embedded into
//! the binary with `include_str!` and served to the environment through a
//! loader, so a broken template surfaces as a render error instead of a
//! startup panic.
//!
//! All names end in `.html`, which turns on minijinja's HTML auto-escaping.
//! Page templates extend `base.html`; the entry form lives in `_form.html`
//! and is included by both `new.html` and `edit.html`.

use std::sync::LazyLock;

use minijinja::Environment;
use serde::Serialize;

pub const BASE: &str = include_str!("../templates/base.html");
pub const FORM: &str = include_str!("../templates/_form.html");
pub const INDEX: &str = include_str!("../templates/index.html");
pub const NEW: &str = include_str!("../templates/new.html");
pub const VIEW: &str = include_str!("../templates/view.html");
pub const EDIT: &str = include_str!("../templates/edit.html");
pub const NOT_FOUND: &str = include_str!("../templates/not_found.html");
pub const ERROR: &str = include_str!("../templates/error.html");

static ENV: LazyLock<Environment<'static>> = LazyLock::new(|| {
    let mut env = Environment::new();
    env.set_loader(embedded_source);
    env
});

fn embedded_source(name: &str) -> Result<Option<String>, minijinja::Error> {
    let source = match name {
        "base.html" => BASE,
        "_form.html" => FORM,
        "index.html" => INDEX,
        "new.html" => NEW,
        "view.html" => VIEW,
        "edit.html" => EDIT,
        "not_found.html" => NOT_FOUND,
        "error.html" => ERROR,
        _ => return Ok(None),
    };
    Ok(Some(source.to_string()))
}

/// Render the named template with `ctx`.
pub fn render<T: Serialize>(name: &str, ctx: T) -> Result<String, minijinja::Error> {
    ENV.get_template(name)?.render(ctx)
}
