//! The route table: every page the site serves.

use std::collections::HashMap;

/// One entry in the page table: a URL path mapped to a template file and the
/// display parameters interpolated into it.
#[derive(Debug, Clone, Copy)]
pub struct Page {
    /// URL path, matched exactly.
    pub path: &'static str,

    /// Template file, relative to the configured template directory.
    pub template: &'static str,

    /// Page identifier, used by templates for per-page styling hooks.
    pub id: &'static str,

    /// Display title. `None` for pages whose template carries its own.
    pub title: Option<&'static str>,
}

impl Page {
    /// The parameter map handed to the render engine.
    pub fn vars(&self) -> HashMap<&'static str, &'static str> {
        let mut vars = HashMap::new();
        vars.insert("id", self.id);
        if let Some(title) = self.title {
            vars.insert("title", title);
        }
        vars
    }
}

/// The full page table.
///
/// The `/simulations/*` paths predate the `/toys/*` rename; both generations
/// stay registered so old links keep working.
pub fn pages() -> &'static [Page] {
    const PAGES: &[Page] = &[
        Page {
            path: "/",
            template: "home/index.html",
            id: "home",
            title: None,
        },
        Page {
            path: "/other",
            template: "other/index.html",
            id: "other",
            title: Some("Other"),
        },
        Page {
            path: "/contact",
            template: "contact/index.html",
            id: "contact",
            title: Some("Contact Me"),
        },
        Page {
            path: "/colourtest",
            template: "colourtest/index.html",
            id: "colourtest",
            title: Some("Colour Test"),
        },
        Page {
            path: "/moire",
            template: "moire/index.html",
            id: "moire",
            title: Some("Moiré Patterns"),
        },
        Page {
            path: "/simulations",
            template: "simulations/index.html",
            id: "simulations",
            title: Some("Simulations"),
        },
        Page {
            path: "/simulations/test",
            template: "simulations/test.html",
            id: "other",
            title: Some("Test Simulation"),
        },
        Page {
            path: "/simulations/doublependulum",
            template: "simulations/doublependulum.html",
            id: "other",
            title: Some("Double Pendulum"),
        },
        Page {
            path: "/simulations/snowflake",
            template: "simulations/snowflake.html",
            id: "other",
            title: Some("Snowflake Automata"),
        },
        Page {
            path: "/toys/test",
            template: "toys/test.html",
            id: "other",
            title: Some("Test Simulation"),
        },
        Page {
            path: "/toys/doublependulum",
            template: "toys/doublependulum.html",
            id: "other",
            title: Some("Double Pendulum"),
        },
        Page {
            path: "/toys/snowflake",
            template: "toys/snowflake.html",
            id: "other",
            title: Some("Snowflake Automata"),
        },
        Page {
            path: "/toys/fractals",
            template: "toys/fractals.html",
            id: "other",
            title: Some("Fractals"),
        },
    ];
    PAGES
}
