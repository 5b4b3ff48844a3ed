//! HTML rendering for the index, repository and administration pages.
//!
//! Templates are compiled into the binary and loaded once into a minijinja
//! environment. Output escaping covers `& < > " '` only, so URLs written
//! into meta tags come out exactly as configured.

use minijinja::{context, Environment, Error, ErrorKind, Output, State, Value};
use std::fmt::Write;

use common::{Configuration, RepositoryDescriptor, RoutingTable, Vcs};

use crate::error::ApiResult;

const INDEX_TEMPLATE: &str = include_str!("../templates/index.html");
const REPO_TEMPLATE: &str = include_str!("../templates/repo.html");
const PANEL_TEMPLATE: &str = include_str!("../templates/panel.html");

/// Renders response bodies from state snapshots.
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    /// Compile the built-in templates.
    pub fn new() -> ApiResult<Self> {
        let mut env = Environment::new();
        env.set_formatter(escape_formatter);
        env.add_template("index.html", INDEX_TEMPLATE)?;
        env.add_template("repo.html", REPO_TEMPLATE)?;
        env.add_template("panel.html", PANEL_TEMPLATE)?;
        Ok(Self { env })
    }

    /// Listing of every repository in `table`.
    pub fn index(&self, table: &RoutingTable) -> ApiResult<String> {
        let tmpl = self.env.get_template("index.html")?;
        Ok(tmpl.render(context! {
            host => table.host(),
            repositories => table.repositories(),
        })?)
    }

    /// `go-import`/`go-source` page for one repository.
    pub fn repository(&self, repo: &RepositoryDescriptor) -> ApiResult<String> {
        let tmpl = self.env.get_template("repo.html")?;
        Ok(tmpl.render(context! { repo => repo })?)
    }

    /// Administration form prefilled with `config`.
    pub fn panel(&self, config: &Configuration) -> ApiResult<String> {
        let tmpl = self.env.get_template("panel.html")?;
        let vcs_kinds: Vec<&str> = Vcs::ALL.iter().map(|v| v.as_str()).collect();
        Ok(tmpl.render(context! {
            config => config,
            vcs_kinds => vcs_kinds,
        })?)
    }
}

fn escape_formatter(
    out: &mut Output<'_>,
    _state: &State<'_, '_>,
    value: &Value,
) -> Result<(), Error> {
    if value.is_undefined() || value.is_none() {
        return Ok(());
    }
    let written = if value.is_safe() {
        write!(out, "{}", value)
    } else {
        out.write_str(&escape_html(&value.to_string()))
    };
    written.map_err(|_| Error::new(ErrorKind::WriteFailure, "failed to write template output"))
}

fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&#34;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}
