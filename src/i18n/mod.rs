use anyhow::{Context, Result};

mod en;
mod ko;

pub(crate) struct Strings {
    pub(crate) plan_title: &'static str,
    pub(crate) plan_target: &'static str,
    pub(crate) plan_entry_required: &'static str,
    pub(crate) plan_entry_optional: &'static str,
    pub(crate) prompt_confirm_run: &'static str,
    pub(crate) run_cancelled: &'static str,
    pub(crate) secret_already_present: &'static str,
    pub(crate) secret_header: &'static str,
    pub(crate) secret_example: &'static str,
    pub(crate) prompt_value_required: &'static str,
    pub(crate) prompt_value_optional: &'static str,
    pub(crate) secret_created: &'static str,
    pub(crate) secret_skipped_required: &'static str,
    pub(crate) secret_skipped_optional: &'static str,
    pub(crate) secret_create_failed: &'static str,
    pub(crate) summary_title: &'static str,
    pub(crate) summary_created: &'static str,
    pub(crate) summary_existing: &'static str,
    pub(crate) summary_optional_skipped: &'static str,
    pub(crate) summary_needs_rerun: &'static str,
    pub(crate) summary_config_title: &'static str,
    pub(crate) summary_blocking_title: &'static str,
    pub(crate) summary_reason_missing: &'static str,
    pub(crate) summary_reason_failed: &'static str,
    pub(crate) summary_rerun_hint: &'static str,
    pub(crate) summary_ready: &'static str,
    pub(crate) check_title: &'static str,
    pub(crate) check_present: &'static str,
    pub(crate) check_missing_required: &'static str,
    pub(crate) check_missing_optional: &'static str,
    pub(crate) check_ready: &'static str,
    pub(crate) check_not_ready: &'static str,
    pub(crate) error_openbao_token_required: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locale {
    En,
    Ko,
}

impl Locale {
    /// Parses a language tag such as `en`, `EN` or `ko-KR`.
    ///
    /// # Errors
    ///
    /// Returns an error for languages without a string table.
    pub fn parse(input: &str) -> Result<Self> {
        let normalized = input.trim().to_ascii_lowercase();
        let base = normalized
            .split('-')
            .next()
            .context("Missing language code")?;
        match base {
            "en" => Ok(Locale::En),
            "ko" => Ok(Locale::Ko),
            _ => anyhow::bail!("Unsupported language: {input}"),
        }
    }
}

/// Operator-facing text for one locale.
pub struct Messages {
    locale: Locale,
}

impl Messages {
    /// # Errors
    ///
    /// Returns an error when `lang` is not a supported locale.
    pub fn new(lang: &str) -> Result<Self> {
        let locale = Locale::parse(lang)?;
        Ok(Self { locale })
    }

    #[must_use]
    pub fn plan_title(&self) -> &'static str {
        self.strings().plan_title
    }

    #[must_use]
    pub fn plan_target(&self, value: &str) -> String {
        format_template(self.strings().plan_target, &[("value", value)])
    }

    #[must_use]
    pub fn plan_entry(&self, name: &str, required: bool) -> String {
        let template = if required {
            self.strings().plan_entry_required
        } else {
            self.strings().plan_entry_optional
        };
        format_template(template, &[("name", name)])
    }

    #[must_use]
    pub fn prompt_confirm_run(&self) -> &'static str {
        self.strings().prompt_confirm_run
    }

    #[must_use]
    pub fn run_cancelled(&self) -> &'static str {
        self.strings().run_cancelled
    }

    #[must_use]
    pub fn secret_already_present(&self, name: &str) -> String {
        format_template(self.strings().secret_already_present, &[("name", name)])
    }

    #[must_use]
    pub fn secret_header(&self, name: &str, description: &str) -> String {
        format_template(
            self.strings().secret_header,
            &[("name", name), ("description", description)],
        )
    }

    #[must_use]
    pub fn secret_example(&self, example: &str) -> String {
        format_template(self.strings().secret_example, &[("example", example)])
    }

    #[must_use]
    pub fn prompt_value(&self, name: &str, required: bool) -> String {
        let template = if required {
            self.strings().prompt_value_required
        } else {
            self.strings().prompt_value_optional
        };
        format_template(template, &[("name", name)])
    }

    #[must_use]
    pub fn secret_created(&self, name: &str) -> String {
        format_template(self.strings().secret_created, &[("name", name)])
    }

    #[must_use]
    pub fn secret_skipped(&self, name: &str, required: bool) -> String {
        let template = if required {
            self.strings().secret_skipped_required
        } else {
            self.strings().secret_skipped_optional
        };
        format_template(template, &[("name", name)])
    }

    #[must_use]
    pub fn secret_create_failed(&self, name: &str, error: &str) -> String {
        format_template(
            self.strings().secret_create_failed,
            &[("name", name), ("error", error)],
        )
    }

    #[must_use]
    pub fn summary_title(&self) -> &'static str {
        self.strings().summary_title
    }

    #[must_use]
    pub fn summary_created(&self, count: usize) -> String {
        format_count(self.strings().summary_created, count)
    }

    #[must_use]
    pub fn summary_existing(&self, count: usize) -> String {
        format_count(self.strings().summary_existing, count)
    }

    #[must_use]
    pub fn summary_optional_skipped(&self, count: usize) -> String {
        format_count(self.strings().summary_optional_skipped, count)
    }

    #[must_use]
    pub fn summary_needs_rerun(&self, count: usize) -> String {
        format_count(self.strings().summary_needs_rerun, count)
    }

    #[must_use]
    pub fn summary_config_title(&self) -> &'static str {
        self.strings().summary_config_title
    }

    #[must_use]
    pub fn summary_blocking_title(&self) -> &'static str {
        self.strings().summary_blocking_title
    }

    #[must_use]
    pub fn summary_reason_missing(&self, name: &str) -> String {
        format_template(self.strings().summary_reason_missing, &[("name", name)])
    }

    #[must_use]
    pub fn summary_reason_failed(&self, name: &str, error: &str) -> String {
        format_template(
            self.strings().summary_reason_failed,
            &[("name", name), ("error", error)],
        )
    }

    #[must_use]
    pub fn summary_rerun_hint(&self) -> &'static str {
        self.strings().summary_rerun_hint
    }

    #[must_use]
    pub fn summary_ready(&self) -> &'static str {
        self.strings().summary_ready
    }

    #[must_use]
    pub fn check_title(&self) -> &'static str {
        self.strings().check_title
    }

    #[must_use]
    pub fn check_present(&self, name: &str) -> String {
        format_template(self.strings().check_present, &[("name", name)])
    }

    #[must_use]
    pub fn check_missing(&self, name: &str, required: bool) -> String {
        let template = if required {
            self.strings().check_missing_required
        } else {
            self.strings().check_missing_optional
        };
        format_template(template, &[("name", name)])
    }

    #[must_use]
    pub fn check_ready(&self) -> &'static str {
        self.strings().check_ready
    }

    #[must_use]
    pub fn check_not_ready(&self, count: usize) -> String {
        format_count(self.strings().check_not_ready, count)
    }

    #[must_use]
    pub fn error_openbao_token_required(&self) -> &'static str {
        self.strings().error_openbao_token_required
    }

    fn strings(&self) -> &'static Strings {
        match self.locale {
            Locale::En => &en::STRINGS,
            Locale::Ko => &ko::STRINGS,
        }
    }
}

fn format_count(template: &str, count: usize) -> String {
    let count_value = count.to_string();
    format_template(template, &[("count", &count_value)])
}

fn format_template(template: &str, pairs: &[(&str, &str)]) -> String {
    let mut output = template.to_string();
    for (key, value) in pairs {
        output = output.replace(&format!("{{{key}}}"), value);
    }
    output
}
