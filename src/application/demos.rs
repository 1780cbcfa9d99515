use crate::config::DemoConfig;
use crate::domain::link::LinkTemplate;
use crate::domain::ports::{IdGeneratorArc, SchedulerArc, Translator};
use crate::domain::wizard::{FieldValue, Step, WizardDefinition, WizardSession};
use crate::error::{DemoError, Result};
use super::wizard::DemoWizard;
use std::fmt;
use std::str::FromStr;

/// Index of the step that generates the link in every preset.
pub const GENERATION_STEP: usize = 2;

/// The interactive demos offered on the product pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoKind {
    /// Payment link and QR code flow for cash merchants.
    Merchant,
    /// Islamic investment portfolio flow.
    Investor,
    /// Stock investing flow; shares the investor steps and link domain.
    Stock,
}

struct StepText {
    key: &'static str,
    title: &'static str,
    description: &'static str,
}

const MERCHANT_STEPS: [StepText; 4] = [
    StepText {
        key: "signUp",
        title: "Sign Up",
        description: "Create your merchant account",
    },
    StepText {
        key: "setup",
        title: "Setup",
        description: "Configure your payment settings",
    },
    StepText {
        key: "create",
        title: "Create",
        description: "Generate payment links and QR codes",
    },
    StepText {
        key: "share",
        title: "Share",
        description: "Share with your customers",
    },
];

const INVESTOR_STEPS: [StepText; 4] = [
    StepText {
        key: "signUp",
        title: "Sign Up",
        description: "Create your investment account",
    },
    StepText {
        key: "preferences",
        title: "Preferences",
        description: "Set your Islamic investment preferences",
    },
    StepText {
        key: "portfolio",
        title: "Portfolio",
        description: "Build your diversified portfolio",
    },
    StepText {
        key: "invest",
        title: "Invest",
        description: "Start investing in stocks, commodities, and indices",
    },
];

impl DemoKind {
    pub const ALL: [DemoKind; 3] = [DemoKind::Merchant, DemoKind::Investor, DemoKind::Stock];

    pub fn subdomain(self) -> &'static str {
        match self {
            DemoKind::Merchant => "cash",
            DemoKind::Investor | DemoKind::Stock => "invest",
        }
    }

    /// Field that must be filled before leaving the sign-up step.
    pub fn name_field(self) -> &'static str {
        match self {
            DemoKind::Merchant => "business_name",
            DemoKind::Investor | DemoKind::Stock => "investor_name",
        }
    }

    fn translation_prefix(self) -> &'static str {
        match self {
            DemoKind::Merchant => "merchantDemo",
            DemoKind::Investor => "bitInvestDemo",
            DemoKind::Stock => "stockDemo",
        }
    }

    fn step_texts(self) -> &'static [StepText; 4] {
        match self {
            DemoKind::Merchant => &MERCHANT_STEPS,
            DemoKind::Investor | DemoKind::Stock => &INVESTOR_STEPS,
        }
    }

    pub fn link_template(self, host: &str) -> LinkTemplate {
        LinkTemplate::new(self.subdomain(), host)
    }

    /// Builds the wizard definition with step text resolved through
    /// `translator`.
    pub fn definition(self, translator: &dyn Translator) -> Result<WizardDefinition> {
        let prefix = self.translation_prefix();
        let steps = self
            .step_texts()
            .iter()
            .enumerate()
            .map(|(index, text)| {
                let step = Step::new(
                    translator.translate(
                        &format!("{prefix}.steps.{}.title", text.key),
                        text.title,
                        &[],
                    ),
                    translator.translate(
                        &format!("{prefix}.steps.{}.description", text.key),
                        text.description,
                        &[],
                    ),
                );
                if index == 0 {
                    step.requiring(self.name_field())
                } else {
                    step
                }
            })
            .collect();

        let definition = WizardDefinition::new(steps)?.with_generation_step(GENERATION_STEP)?;
        Ok(match self {
            DemoKind::Merchant => definition
                .with_default("payment_amount", 25i64)
                .with_default("payment_type", "fixed")
                .with_default("payment_description", ""),
            DemoKind::Investor | DemoKind::Stock => definition
                .with_default("initial_investment", 1000i64)
                .with_default("asset_preference", "us_stocks")
                .with_default("risk_profile", "moderate")
                .with_default("investment_goal", ""),
        })
    }

    /// Builds a ready-to-drive wizard for this demo.
    pub fn wizard(
        self,
        config: &DemoConfig,
        translator: &dyn Translator,
        scheduler: SchedulerArc,
        ids: IdGeneratorArc,
    ) -> Result<DemoWizard> {
        Ok(DemoWizard::new(
            self.definition(translator)?,
            self.link_template(&config.host),
            scheduler,
            ids,
            config.generation_delay,
        ))
    }
}

impl fmt::Display for DemoKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DemoKind::Merchant => write!(f, "merchant"),
            DemoKind::Investor => write!(f, "investor"),
            DemoKind::Stock => write!(f, "stock"),
        }
    }
}

impl FromStr for DemoKind {
    type Err = DemoError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "merchant" | "cash" => Ok(DemoKind::Merchant),
            "investor" | "invest" => Ok(DemoKind::Investor),
            "stock" | "stocks" => Ok(DemoKind::Stock),
            other => Err(DemoError::ValidationError(format!("Unknown demo: {other}"))),
        }
    }
}

/// The summary line shown under a merchant's generated link.
pub fn payment_preview(session: &WizardSession, translator: &dyn Translator) -> String {
    let fixed = session
        .field("payment_type")
        .and_then(FieldValue::as_text)
        .is_none_or(|kind| kind == "fixed");

    if fixed {
        let amount = session
            .field("payment_amount")
            .and_then(FieldValue::as_number)
            .unwrap_or_default();
        let amount = format!("{amount:.2}");
        translator.translate(
            "merchantDemo.step3.preview.fixedAmount",
            "Fixed amount: ${{amount}}",
            &[("amount", amount.as_str())],
        )
    } else {
        translator.translate(
            "merchantDemo.step3.preview.variableAmount",
            "Customer will enter amount",
            &[],
        )
    }
}

/// The profile card shown while an investor configures their portfolio.
pub fn portfolio_preview(session: &WizardSession, translator: &dyn Translator) -> String {
    let text = |name: &str| session.field(name).and_then(FieldValue::as_text).unwrap_or_default();

    let investor = Some(text("investor_name")).filter(|name| !name.is_empty());
    let investor = investor.unwrap_or("Your Name");
    let investment = session
        .field("initial_investment")
        .and_then(FieldValue::as_number)
        .unwrap_or_default();
    let asset = text("asset_preference").replacen('_', " ", 1).to_uppercase();
    let risk = capitalize(text("risk_profile"));

    let heading = translator.translate(
        "bitInvestDemo.step2.preview.profile",
        "{{name}}'s Profile",
        &[("name", investor)],
    );
    format!("{heading}\nInvestment: ${investment:.2}\nAsset: {asset}\nRisk: {risk}")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
