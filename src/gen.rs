// src/gen.rs
// Render the aggregate catalog as the generated half of the errorcodes
// module: class constants first, then per-class code assignments.

use std::error::Error;

use crate::catalog::Catalog;

/// Pure function of the catalog: the ordered lines of the module body.
/// Classes ascend by class code; codes ascend within each class.
pub fn module_lines(cat: &Catalog) -> Result<Vec<String>, Box<dyn Error>> {
    let mut lines = Vec::new();

    lines.push(s!());
    lines.push(s!("# Error classes"));
    for (class, label) in &cat.classes {
        lines.push(format!("CLASS_{} = '{}'", class_constant(label)?, class));
    }

    for (class, label) in &cat.classes {
        lines.push(s!());
        lines.push(format!("# {label}"));
        if let Some(errs) = cat.errors.get(class) {
            for (code, errlabel) in errs {
                lines.push(format!("{errlabel} = '{code}'"));
            }
        }
    }

    Ok(lines)
}

/// "Class 08 - Connection Exception (subclass)" → "CONNECTION_EXCEPTION"
fn class_constant(label: &str) -> Result<String, Box<dyn Error>> {
    let (_, desc) = label
        .split_once(" - ")
        .ok_or_else(|| format!("class label without ' - ' separator: {label}"))?;
    let desc = desc.split('(').next().unwrap_or("").trim();
    Ok(desc.replace([' ', '/'], "_").to_uppercase())
}
