// src/params.rs
use std::path::PathBuf;

use crate::version::Version;

pub const DOCS_HOST: &str = "www.postgresql.org";
pub const GIT_HOST: &str = "git.postgresql.org";

/// Separator line between the hand-written header and the generated body.
pub const MARKER: &str = "# autogenerated";

// If you add a version here, fix the docs too (errorcodes.rst, err.rst).
pub const VERSIONS: [Version; 10] = [
    Version::new(8, 1),
    Version::new(8, 2),
    Version::new(8, 3),
    Version::new(8, 4),
    Version::new(9, 0),
    Version::new(9, 1),
    Version::new(9, 2),
    Version::new(9, 3),
    Version::new(9, 4),
    Version::new(9, 5),
];

/// Host plus request path with a single `{}` placeholder for the version.
#[derive(Clone)]
pub struct UrlTemplate {
    pub host: &'static str,
    pub path: &'static str,
}

impl UrlTemplate {
    pub fn path_for(&self, version: &str) -> String {
        self.path.replacen("{}", version, 1)
    }
}

#[derive(Clone)]
pub struct Params {
    pub target: PathBuf,        // module file rewritten in place
    pub versions: Vec<Version>, // ascending; also the merge order
    pub sgml_url: UrlTemplate,  // dotted version, e.g. /docs/9.0/...
    pub txt_url: UrlTemplate,   // underscored version, e.g. REL9_4_STABLE
    pub marker: &'static str,
}

impl Params {
    pub fn new(target: PathBuf) -> Self {
        Self {
            target,
            versions: VERSIONS.to_vec(),
            sgml_url: UrlTemplate {
                host: DOCS_HOST,
                path: "/docs/{}/static/errcodes-appendix.html",
            },
            txt_url: UrlTemplate {
                host: GIT_HOST,
                path: "/gitweb/?p=postgresql.git;a=blob_plain;\
                       f=src/backend/utils/errcodes.txt;hb=REL{}_STABLE",
            },
            marker: MARKER,
        }
    }
}
