//! prefixes.rs - Russian prefixes and prepositions that may precede a root.
//!
//! Each alternative is written with the same look-alike tolerance as the
//! roots. Several of them can match the empty string, which keeps the
//! prefix group optional in practice even where a rule marks it required.
//!
//! License: MIT OR APACHE 2.0

use once_cell::sync::Lazy;

/// Prefix alternatives, joined with `|` by [`prefix_alternation`].
pub const PREFIX_PATTERNS: &[&str] = &[
    r"[уyоoаa]?(?=[еёeхx])",
    r"[вvbсc]?(?=[хпбмгжxpmgj])",
    r"[вvbсc]?[ъь]?(?=[еёe])",
    r"ё?(?=[бb6])",
    r"[вvb]?[ыi]",
    r"[зz3]?[аa]",
    r"[нnh]?[аaеeиi]",
    r"[вvb]?[сc](?=[хпбмгжxpmgj])",
    r"[оo]?[тtбb6](?=[хпбмгжxpmgj])",
    r"[оo]?[тtбb6][ъь]?(?=[еёe])",
    r"[иiвvb]?[зz3](?=[хпбмгжxpmgj])",
    r"[иiвvb]?[зz3][ъь]?(?=[еёe])",
    r"[иi]?[сc](?=[хпбмгжxpmgj])",
    r"([пpдdg]?[оo]([бb6]?(?=[хпбмгжxpmgj])|[бb6][ъь]?(?=[еёe])|[зz3]?[аa])?)",
    r"[пp]?[рr]?[оoиi]",
    r"[зz3]?[лl]?[оo]",
    r"[нnh]?[аa]?[дdg](?=[хпбмгжxpmgj])",
    r"[нnh]?[аa]?[дdg][ъь]?(?=[еёe])",
    r"[пp]?[оoаa]?[дdg](?=[хпбмгжxpmgj])",
    r"[пp]?[оoаa]?[дdg][ъь]?(?=[еёe])",
    r"[рr]?[аa]?[зz3сc](?=[хпбмгжxpmgj])",
    r"[рr]?[аa]?[зz3сc][ъь]?(?=[еёe])",
    r"[вvb]?[оo]?[зz3сc](?=[хпбмгжxpmgj])",
    r"[вvb]?[оo]?[зz3сc][ъь]?(?=[еёe])",
    r"[нnh]?[еe]?[дdg]?[оo]",
    r"[пp]?[еe]?[рr]?[еe]",
    r"[oо]?[дdg]?[нnh]?[оo]",
    r"[кk]?[oо]?[нnh]?[оo]",
    r"[мm]?[уy]?[дdg]?[oоaа]",
    r"[oо]?[сc]?[тt]?[оo]",
    r"[дdg]?[уy]?[рpr]?[оoаa]",
    r"[хx]?[уy]?[дdg]?[оoаa]",
    r"[мm]?[нnh]?[оo]?[гg]?[оo]",
    r"[мm]?[оo]?[рpr]?[дdg]?[оoаa]",
    r"[мm]?[оo]?[зz3]?[гg]?[оoаa]",
    r"[дdg]?[оo]?[лl]?[бb6]?[оoаa]",
    r"[оo]?[сc]?[тt]?[рpr]?[оo]",
];

static PREFIX_ALTERNATION: Lazy<String> = Lazy::new(|| PREFIX_PATTERNS.join("|"));

/// All prefix alternatives joined with `|`, ready to be wrapped in `(?:...)`.
pub fn prefix_alternation() -> &'static str {
    PREFIX_ALTERNATION.as_str()
}
