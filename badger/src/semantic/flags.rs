// SPDX-License-Identifier: GPL-3.0-or-later

//! Flag classification tables and the matching primitives shared by all
//! tool families.
//!
//! A table maps flag spellings to their semantic role and value syntax.
//! Lookup is deterministic: exact spellings take precedence over prefix
//! spellings, and among prefix matches the longest spelling wins. Tables
//! are built once per family at startup and never mutated afterwards, so
//! they are shared by reference across concurrent recognitions.

use std::collections::HashMap;

/// The semantic role of a command line flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagCategory {
    /// Names a source file explicitly.
    Input,
    /// Names the output artifact (e.g. `-o`).
    Output,
    /// Preprocessor macro definition or removal.
    DefineMacro,
    /// Header search path configuration.
    IncludePath,
    /// The invocation stops after preprocessing (e.g. `-E`).
    PreprocessorOnly,
    /// The invocation stops after compilation proper (e.g. `-c`).
    CompileOnly,
    /// Only affects linking.
    LinkOnly,
    /// Language or language-standard selection.
    StandardVersion,
    /// Warning and diagnostic configuration.
    Diagnostic,
    /// Version or help query; the tool does no work.
    Query,
    /// Recognized but semantically irrelevant; kept verbatim.
    PassThrough,
    /// Consumed and dropped from the replayed argument list.
    Ignored,
}

/// How an arity-one flag carries its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attachment {
    /// The value is the following token: `-o file`.
    Separate,
    /// The value is attached with `=`: `--sysroot=/opt`.
    Eq,
    /// Attached with `=` or the following token: `-std=c99`, `-std c99`.
    EqOrSeparate,
    /// Concatenated to the flag: `-DNAME`.
    Glued,
    /// Concatenated or the following token: `-I/usr/include`, `-I dir`.
    GluedOrSeparate,
}

/// The definition of one flag: its role and its value syntax.
/// `value: None` means the flag takes no value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagDef {
    pub category: FlagCategory,
    pub value: Option<Attachment>,
}

impl FlagDef {
    pub const fn plain(category: FlagCategory) -> Self {
        Self {
            category,
            value: None,
        }
    }

    pub const fn with_value(category: FlagCategory, attachment: Attachment) -> Self {
        Self {
            category,
            value: Some(attachment),
        }
    }
}

/// How a table entry is matched against a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spelling {
    /// The token must spell the flag itself; attached values extend it.
    Exact(&'static str),
    /// Any token starting with the text matches, remainder ignored.
    Prefix(&'static str),
}

/// The result of resolving one token against a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// The token is not covered by the table.
    Miss,
    Hit(FlagMatch),
    /// The flag was recognized, but its required value is absent.
    MissingValue(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagMatch {
    pub category: FlagCategory,
    /// The flag's value, when it carries one.
    pub value: Option<String>,
    /// Whether the value was taken from the following token, which the
    /// caller must then skip.
    pub consumed_next: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PrefixRule {
    /// A `Spelling::Prefix` entry: any continuation matches.
    Open,
    /// An `Spelling::Exact` entry with an attached value form.
    Attached,
}

/// One family's immutable flag table.
pub struct FlagsByName {
    exact: HashMap<&'static str, FlagDef>,
    /// Non-exact candidates, longest spelling first, so a narrow flag is
    /// never shadowed by a broader prefix.
    prefixed: Vec<(&'static str, FlagDef, PrefixRule)>,
}

impl FlagsByName {
    pub fn new(definitions: &[(Spelling, FlagDef)]) -> Self {
        let mut exact = HashMap::new();
        let mut prefixed = Vec::new();
        for (spelling, def) in definitions {
            match spelling {
                Spelling::Exact(text) => {
                    exact.insert(*text, *def);
                    let attachable = matches!(
                        def.value,
                        Some(Attachment::Eq)
                            | Some(Attachment::EqOrSeparate)
                            | Some(Attachment::Glued)
                            | Some(Attachment::GluedOrSeparate)
                    );
                    if attachable {
                        prefixed.push((*text, *def, PrefixRule::Attached));
                    }
                }
                Spelling::Prefix(text) => prefixed.push((*text, *def, PrefixRule::Open)),
            }
        }
        prefixed.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
        Self { exact, prefixed }
    }

    /// Resolves one token. `next` is the following token, consumed when
    /// the flag takes its value separately.
    pub fn lookup(&self, token: &str, next: Option<&str>) -> Lookup {
        if let Some((&text, def)) = self.exact.get_key_value(token) {
            return match def.value {
                None => Lookup::Hit(FlagMatch {
                    category: def.category,
                    value: None,
                    consumed_next: false,
                }),
                Some(Attachment::Separate)
                | Some(Attachment::EqOrSeparate)
                | Some(Attachment::GluedOrSeparate) => match next {
                    Some(value) => Lookup::Hit(FlagMatch {
                        category: def.category,
                        value: Some(value.to_string()),
                        consumed_next: true,
                    }),
                    None => Lookup::MissingValue(text),
                },
                Some(Attachment::Eq) | Some(Attachment::Glued) => Lookup::MissingValue(text),
            };
        }

        for (text, def, rule) in &self.prefixed {
            if !token.starts_with(text) {
                continue;
            }
            match rule {
                PrefixRule::Open => {
                    return Lookup::Hit(FlagMatch {
                        category: def.category,
                        value: None,
                        consumed_next: false,
                    });
                }
                PrefixRule::Attached => {
                    let rest = &token[text.len()..];
                    let value = match def.value {
                        Some(Attachment::Eq) | Some(Attachment::EqOrSeparate) => {
                            rest.strip_prefix('=')
                        }
                        Some(Attachment::Glued) | Some(Attachment::GluedOrSeparate)
                            if !rest.is_empty() =>
                        {
                            Some(rest)
                        }
                        _ => None,
                    };
                    match value {
                        Some(value) => {
                            return Lookup::Hit(FlagMatch {
                                category: def.category,
                                value: Some(value.to_string()),
                                consumed_next: false,
                            });
                        }
                        // a shorter spelling may still apply
                        None => continue,
                    }
                }
            }
        }

        Lookup::Miss
    }
}

#[cfg(test)]
mod test {
    use super::FlagCategory as C;
    use super::*;

    fn table() -> FlagsByName {
        FlagsByName::new(&[
            (Spelling::Exact("-c"), FlagDef::plain(C::CompileOnly)),
            (
                Spelling::Exact("-o"),
                FlagDef::with_value(C::Output, Attachment::GluedOrSeparate),
            ),
            (
                Spelling::Exact("-std"),
                FlagDef::with_value(C::StandardVersion, Attachment::EqOrSeparate),
            ),
            (
                Spelling::Exact("-I"),
                FlagDef::with_value(C::IncludePath, Attachment::GluedOrSeparate),
            ),
            (Spelling::Prefix("-W"), FlagDef::plain(C::Diagnostic)),
            (Spelling::Prefix("-Wl,"), FlagDef::plain(C::LinkOnly)),
            (Spelling::Exact("-dumpversion"), FlagDef::plain(C::Query)),
            (Spelling::Prefix("-d"), FlagDef::plain(C::PassThrough)),
        ])
    }

    #[test]
    fn test_exact_match_without_value() {
        let result = table().lookup("-c", Some("main.c"));

        assert_eq!(
            result,
            Lookup::Hit(FlagMatch {
                category: C::CompileOnly,
                value: None,
                consumed_next: false,
            })
        );
    }

    #[test]
    fn test_separate_value_consumes_the_next_token() {
        let result = table().lookup("-o", Some("main.o"));

        assert_eq!(
            result,
            Lookup::Hit(FlagMatch {
                category: C::Output,
                value: Some("main.o".into()),
                consumed_next: true,
            })
        );
    }

    #[test]
    fn test_glued_value_splits_the_token() {
        let result = table().lookup("-omain.o", None);

        assert_eq!(
            result,
            Lookup::Hit(FlagMatch {
                category: C::Output,
                value: Some("main.o".into()),
                consumed_next: false,
            })
        );
    }

    #[test]
    fn test_eq_attached_value() {
        let result = table().lookup("-std=c99", None);

        assert_eq!(
            result,
            Lookup::Hit(FlagMatch {
                category: C::StandardVersion,
                value: Some("c99".into()),
                consumed_next: false,
            })
        );
    }

    #[test]
    fn test_missing_required_value() {
        assert_eq!(table().lookup("-o", None), Lookup::MissingValue("-o"));
        assert_eq!(table().lookup("-I", None), Lookup::MissingValue("-I"));
    }

    #[test]
    fn test_exact_takes_precedence_over_prefix() {
        // "-dumpversion" must not be swallowed by the "-d" prefix rule
        let result = table().lookup("-dumpversion", None);

        assert_eq!(
            result,
            Lookup::Hit(FlagMatch {
                category: C::Query,
                value: None,
                consumed_next: false,
            })
        );
    }

    #[test]
    fn test_longest_prefix_wins() {
        let linker = table().lookup("-Wl,--gc-sections", None);
        let warning = table().lookup("-Wall", None);

        assert!(matches!(linker, Lookup::Hit(m) if m.category == C::LinkOnly));
        assert!(matches!(warning, Lookup::Hit(m) if m.category == C::Diagnostic));
    }

    #[test]
    fn test_unknown_token_is_a_miss() {
        assert_eq!(table().lookup("--frobnicate", None), Lookup::Miss);
    }
}
