// src/runner.rs
use std::error::Error;

use crate::{
    catalog::Catalog,
    core::net,
    file::{read_base_file, write_module},
    r#gen,
    params::Params,
    progress::Progress,
    specs,
};

/// Summary of what a run produced.
pub struct RunSummary {
    pub classes: usize,
    pub codes: usize,
}

/// Top-level runner: read the base file first (fail fast on a wrong
/// target), fetch and merge every requested version, rewrite the module.
pub fn run(
    params: &Params,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, Box<dyn Error>> {
    let base = read_base_file(&params.target, params.marker)?;

    if let Some(p) = progress.as_deref_mut() {
        p.begin(params.versions.len());
    }
    let catalog = fetch_errors(params, progress.as_deref_mut())?;

    let lines = r#gen::module_lines(&catalog)?;
    write_module(&params.target, &base, &lines)?;
    logf!(
        "wrote {}: {} classes, {} codes",
        params.target.display(),
        catalog.classes.len(),
        catalog.code_count()
    );

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    Ok(RunSummary {
        classes: catalog.classes.len(),
        codes: catalog.code_count(),
    })
}

/// Fetch and merge the catalogs for every version, in the given order.
/// Any fetch or parse failure aborts the whole run; the tool is meant to
/// be re-run in full after a fix, not to resume.
pub fn fetch_errors(
    params: &Params,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<Catalog, Box<dyn Error>> {
    let mut catalog = Catalog::new();

    for &version in &params.versions {
        if let Some(p) = progress.as_deref_mut() {
            p.log(&version.to_string());
        }
        let spec = specs::spec_for(version);
        let (host, path) = spec.url(params, version);
        logf!("{version} via {}: http://{host}{path}", spec.name());

        let doc = net::http_get(&host, &path)?;
        let part = spec.parse(&doc).map_err(|e| {
            loge!("{version}: {e}");
            format!("{version}: {e}")
        })?;
        catalog.merge(part);
    }

    Ok(catalog)
}
