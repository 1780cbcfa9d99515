use super::ports::Translator;
use serde::Serialize;

/// How close (in scroll units) to the bottom counts as having read the
/// whole document.
pub const SCROLL_BUFFER: u32 = 50;

struct RiskText {
    key: &'static str,
    title: &'static str,
    content: &'static str,
}

const COMMON_RISKS: &[RiskText] = &[
    RiskText {
        key: "marketRisk",
        title: "Market Risk",
        content: "Financial markets can be volatile and prices of financial instruments may rise or fall rapidly. This volatility can result in significant losses of your invested capital in a short period of time.",
    },
    RiskText {
        key: "operationalRisk",
        title: "Operational Risk",
        content: "System failures, network disruptions, and other operational issues may affect your ability to execute transactions or access your account. While we maintain robust systems, no electronic platform can guarantee 100% uptime or security.",
    },
    RiskText {
        key: "thirdPartyRisk",
        title: "Third-Party Risk",
        content: "Your funds may be held with third-party institutions. We select our partners with care, but we cannot guarantee their continued solvency or security measures.",
    },
    RiskText {
        key: "cyberRisk",
        title: "Cybersecurity Risk",
        content: "Despite our security measures, we cannot guarantee complete protection against cybersecurity threats. You should take appropriate measures to secure your account and personal information.",
    },
    RiskText {
        key: "regulatoryRisk",
        title: "Regulatory and Legal Risk",
        content: "Changes in laws, regulations, or tax policies may adversely affect the value of your investments or the operation of our platforms. These changes can occur in any jurisdiction relevant to your activities.",
    },
];

const LDN_RISKS: &[RiskText] = &[
    RiskText {
        key: "leverageRisk",
        title: "Leverage Risk",
        content: "Trading with leverage can significantly increase potential profits, but it also magnifies potential losses. You may lose more than your initial investment and be required to deposit additional funds to maintain your positions or cover losses.",
    },
    RiskText {
        key: "marginCallRisk",
        title: "Margin Call and Liquidation Risk",
        content: "If your account equity falls below required margin levels, your positions may be liquidated automatically without prior notice. Market volatility may result in rapid liquidation at unfavorable prices.",
    },
    RiskText {
        key: "forexRisk",
        title: "Foreign Exchange Risk",
        content: "Foreign exchange markets can be highly volatile. Significant changes in currency exchange rates may occur in very short periods of time, which can result in substantial losses.",
    },
    RiskText {
        key: "cryptoVolatilityRisk",
        title: "Cryptocurrency Volatility Risk",
        content: "Cryptocurrencies often experience significant price volatility. The value of cryptocurrency instruments may decrease substantially in a short period, potentially resulting in complete loss of invested capital.",
    },
];

const ADFAALY_RISKS: &[RiskText] = &[
    RiskText {
        key: "paymentProcessingRisk",
        title: "Payment Processing Risk",
        content: "Transactions may be delayed, rejected, or reversed due to compliance checks, technical issues, or third-party payment processor policies beyond our control.",
    },
    RiskText {
        key: "fxConversionRisk",
        title: "Currency Conversion Risk",
        content: "When transacting in multiple currencies, exchange rate fluctuations may affect the final amount received or paid. Additional fees may apply to currency conversions.",
    },
    RiskText {
        key: "fraudRisk",
        title: "Fraud and Chargeback Risk",
        content: "For merchants, payments received may be subject to chargebacks or reversals in cases of fraud, customer disputes, or regulatory actions. Maintain proper documentation of all transactions.",
    },
    RiskText {
        key: "complianceRisk",
        title: "Compliance Risk",
        content: "Payment services are subject to strict regulatory requirements. Your account may be limited, suspended, or closed if your activities raise compliance concerns or violate our terms of service.",
    },
];

const INTRODUCTION: &str =
    "The following disclosure outlines the main risks associated with using our platform and services. This is not an exhaustive list of all risks involved. You should carefully consider whether our services are suitable for you in light of your financial resources, experience, objectives, and other relevant circumstances.";

const GENERAL_TITLE: &str = "General Risk Statement:";
const GENERAL_CONTENT: &str =
    "Financial activities involve significant risk. You may lose some or all of your invested capital or deposited funds. Past performance is not indicative of future results. You should not engage in financial activities with money you cannot afford to lose. If you have any doubts, you should seek independent financial advice.";

const DEFAULT_SPECIFIC_STATEMENT: &str =
    "This platform involves financial risks that you should fully understand before proceeding.";

fn specific_statement_text(platform_key: &str) -> &'static str {
    match platform_key {
        "ldn" => {
            "Trading in forex, cryptocurrencies, and other leveraged products carries a high level of risk and may not be suitable for all investors. Before deciding to trade, you should carefully consider your investment objectives, level of experience, and risk appetite."
        }
        "adfaaly" => {
            "Payment processing services involve risks related to compliance, fraud, and operational issues. Merchants and agents face additional risks related to chargebacks, regulatory requirements, and handling of client funds."
        }
        _ => DEFAULT_SPECIFIC_STATEMENT,
    }
}

/// (platform key, account type, [(translation key, fallback)])
type DisclaimerTable = &'static [(
    &'static str,
    &'static str,
    &'static [(&'static str, &'static str)],
)];

const DISCLAIMERS: DisclaimerTable = &[
    (
        "ldn",
        "retail",
        &[
            (
                "tradingIsRisky",
                "Trading in financial instruments carries a high level of risk and may not be suitable for all investors. You should carefully consider your investment objectives, level of experience, and risk appetite.",
            ),
            (
                "leverageWarning",
                "Trading on margin with leverage means you may lose more than your initial deposit. Make sure you fully understand the risks involved and if necessary, seek independent financial advice.",
            ),
        ],
    ),
    (
        "ldn",
        "introducing-broker",
        &[
            (
                "introducingBrokerWarning",
                "As an Introducing Broker, you are responsible for properly representing our services to clients. Misrepresenting products or making guaranteed return promises is strictly prohibited.",
            ),
            (
                "clientLossWarning",
                "Your clients may experience losses when trading. You must ensure all referred clients understand the risks associated with trading our products.",
            ),
        ],
    ),
    (
        "ldn",
        "institutional",
        &[
            (
                "institutionalWarning",
                "Even with advanced trading tools and infrastructure, institutional trading carries significant risks. Market disruptions, liquidity events, and system failures can impact operations.",
            ),
            (
                "dueDiligenceReminder",
                "Your organization should conduct thorough due diligence and risk assessment before utilizing our services.",
            ),
        ],
    ),
    (
        "adfaaly",
        "merchant",
        &[
            (
                "merchantWarning",
                "Payment processing involves compliance with complex regulations. Your account may be subject to holds or reserves based on your business type, transaction volume, or risk profile.",
            ),
            (
                "chargebackRisk",
                "You bear the financial responsibility for chargebacks and payment disputes. Maintain proper documentation and clear refund policies to mitigate these risks.",
            ),
        ],
    ),
    (
        "adfaaly",
        "agent",
        &[
            (
                "agentWarning",
                "As a payment agent, you must comply with all applicable laws regarding money transfer, anti-money laundering, and know-your-customer requirements.",
            ),
            (
                "agentLiabilityWarning",
                "You may be held liable for facilitating fraudulent transactions. Always verify the identity of your customers and the legitimacy of transactions.",
            ),
        ],
    ),
    (
        "adfaaly",
        "customer",
        &[
            (
                "paymentWarning",
                "Electronic payments may be subject to processing delays, technical issues, or security concerns. Always verify transaction details before confirming.",
            ),
            (
                "unauthorizedTransactionWarning",
                "Protect your account credentials. You may be responsible for unauthorized transactions if you fail to keep your authentication methods secure.",
            ),
        ],
    ),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RiskSection {
    pub title: String,
    pub content: String,
}

/// Derives the brand key from a platform name, e.g. `BitLDN` -> `ldn`.
pub fn platform_key(platform: &str) -> String {
    platform.to_lowercase().replacen("bit", "", 1)
}

/// Risk disclosure modal state for one platform and account type.
///
/// When `required`, acceptance is gated on the reader having scrolled to the
/// bottom since the modal was last opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiskDisclosure {
    platform: Option<String>,
    platform_key: Option<String>,
    account_type: Option<String>,
    required: bool,
    is_open: bool,
    has_read: bool,
}

impl RiskDisclosure {
    pub fn new(platform: Option<&str>, account_type: Option<&str>, required: bool) -> Self {
        Self {
            platform: platform.map(str::to_string),
            platform_key: platform.map(platform_key),
            account_type: account_type.map(str::to_string),
            required,
            is_open: false,
            has_read: false,
        }
    }

    pub fn platform(&self) -> Option<&str> {
        self.platform.as_deref()
    }

    pub fn platform_key(&self) -> Option<&str> {
        self.platform_key.as_deref()
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn has_read(&self) -> bool {
        self.has_read
    }

    pub fn open(&mut self) {
        self.is_open = true;
        self.has_read = false;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// Records the scroll position of the document body.
    pub fn record_scroll(&mut self, scroll_top: u32, scroll_height: u32, client_height: u32) {
        if !self.required {
            return;
        }
        if scroll_top.saturating_add(client_height) >= scroll_height.saturating_sub(SCROLL_BUFFER) {
            self.has_read = true;
        }
    }

    pub fn can_accept(&self) -> bool {
        !self.required || self.has_read
    }

    /// Accepts and closes the disclosure. A no-op returning `false` while
    /// the document still has to be read.
    pub fn accept(&mut self) -> bool {
        if !self.can_accept() {
            return false;
        }
        self.close();
        true
    }

    pub fn introduction(&self, translator: &dyn Translator) -> String {
        translator.translate("riskIntroduction", INTRODUCTION, &[])
    }

    pub fn general_statement(&self, translator: &dyn Translator) -> RiskSection {
        RiskSection {
            title: translator.translate("generalRiskStatement", GENERAL_TITLE, &[]),
            content: translator.translate("generalRiskDescription", GENERAL_CONTENT, &[]),
        }
    }

    /// Statement for the disclosure's platform. Platforms without their own
    /// text get a generic statement; `None` only when no platform is set.
    pub fn specific_statement(&self, translator: &dyn Translator) -> Option<RiskSection> {
        let (platform, key) = (self.platform.as_deref()?, self.platform_key.as_deref()?);
        let title = format!("{platform} Specific Risk Statement:");
        Some(RiskSection {
            title: translator.translate(&format!("{key}SpecificRisk.title"), &title, &[]),
            content: translator.translate(
                &format!("{key}SpecificRisk.content"),
                specific_statement_text(key),
                &[],
            ),
        })
    }

    pub fn risks(&self, translator: &dyn Translator) -> Vec<RiskSection> {
        let specific: &[RiskText] = match self.platform_key.as_deref() {
            Some("ldn") => LDN_RISKS,
            Some("adfaaly") => ADFAALY_RISKS,
            _ => &[],
        };

        COMMON_RISKS
            .iter()
            .chain(specific)
            .map(|risk| RiskSection {
                title: translator.translate(&format!("{}.title", risk.key), risk.title, &[]),
                content: translator.translate(&format!("{}.content", risk.key), risk.content, &[]),
            })
            .collect()
    }

    pub fn disclaimers(&self, translator: &dyn Translator) -> Vec<String> {
        let (Some(key), Some(account_type)) =
            (self.platform_key.as_deref(), self.account_type.as_deref())
        else {
            return Vec::new();
        };

        DISCLAIMERS
            .iter()
            .find(|(platform, kind, _)| *platform == key && *kind == account_type)
            .map(|(_, _, texts)| {
                texts
                    .iter()
                    .map(|(text_key, fallback)| translator.translate(text_key, fallback, &[]))
                    .collect()
            })
            .unwrap_or_default()
    }
}
