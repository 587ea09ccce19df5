//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält die Laufzeit-Optionen, die `app` und `render` gemeinsam lesen,
//! um direkte Abhängigkeiten zu vermeiden.

pub mod options;

pub use options::LineOptions;
