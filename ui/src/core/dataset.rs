//! Static dashboard dataset.
//!
//! Everything here is `'static` and compiled into the binary: three
//! dashboards, four quarters each, four months per quarter. Views and the
//! exporter read it by reference; nothing parses it at runtime.

use super::format::FormatterKind;

/// Number of monthly points in every primary/comparison series.
pub const MONTH_COUNT: usize = 4;

/// Month labels shared by every series (index-aligned with the data).
pub const MONTHS: [&str; MONTH_COUNT] = ["Jan", "Feb", "Mar", "Apr"];

/// A named analytical view with its copy and per-quarter data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dashboard {
    pub key: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub formatter: FormatterKind,
    pub cards: CardCopy,
    pub quarters: &'static [QuarterRecord],
}

/// One period of data within a dashboard.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuarterRecord {
    pub key: &'static str,
    pub primary: [f64; MONTH_COUNT],
    pub comparison: Option<[f64; MONTH_COUNT]>,
    /// Segment label → fraction, in display order.
    pub segments: &'static [(&'static str, f64)],
    /// Metric label → pre-formatted value, in display order.
    pub summary: &'static [(&'static str, &'static str)],
    pub insights: &'static [&'static str],
}

/// Titles, series labels and ARIA text for every card on the page.
///
/// `Default` is the empty bundle handed out for unknown dashboards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CardCopy {
    pub bar: BarCopy,
    pub line: LineCopy,
    pub doughnut: DoughnutCopy,
    pub summary: SectionCopy,
    pub insights: SectionCopy,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BarCopy {
    pub title: &'static str,
    pub primary_label: &'static str,
    pub comparison_label: &'static str,
    pub aria_label: &'static str,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineCopy {
    pub title: &'static str,
    pub primary_label: &'static str,
    pub aria_label: &'static str,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DoughnutCopy {
    pub title: &'static str,
    pub legend_title: &'static str,
    pub aria_label: &'static str,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SectionCopy {
    pub title: &'static str,
}

/// Ordered collection of dashboards. Definition order is display order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dataset {
    dashboards: &'static [Dashboard],
}

impl Dataset {
    pub const fn new(dashboards: &'static [Dashboard]) -> Self {
        Self { dashboards }
    }

    /// The embedded revenue / marketing / product data.
    pub const fn builtin() -> Self {
        Self::new(BUILTIN)
    }

    pub fn dashboards(&self) -> &'static [Dashboard] {
        self.dashboards
    }
}

impl Dashboard {
    pub fn quarter(&self, key: &str) -> Option<&'static QuarterRecord> {
        self.quarters.iter().find(|quarter| quarter.key == key)
    }
}

const BUILTIN: &[Dashboard] = &[REVENUE, MARKETING, PRODUCT];

const REVENUE: Dashboard = Dashboard {
    key: "revenue",
    label: "Revenue Performance",
    description: "Track bookings against plan and highlight the go-to-market channels that fuel quarterly growth.",
    formatter: FormatterKind::Currency,
    cards: CardCopy {
        bar: BarCopy {
            title: "Revenue vs Target",
            primary_label: "Revenue",
            comparison_label: "Target",
            aria_label: "Bar chart comparing revenue to target by month",
        },
        line: LineCopy {
            title: "Revenue Trend",
            primary_label: "Revenue",
            aria_label: "Line chart showing revenue trajectory",
        },
        doughnut: DoughnutCopy {
            title: "Channel Breakdown",
            legend_title: "Revenue share by channel",
            aria_label: "Doughnut chart showing revenue share by channel",
        },
        summary: SectionCopy {
            title: "Quarterly Summary",
        },
        insights: SectionCopy {
            title: "Revenue Highlights & Next Steps",
        },
    },
    quarters: &[
        QuarterRecord {
            key: "Q1",
            primary: [120000.0, 135000.0, 128000.0, 142000.0],
            comparison: Some([115000.0, 130000.0, 125000.0, 140000.0]),
            segments: &[
                ("Direct", 0.45),
                ("Partners", 0.25),
                ("Self-serve", 0.2),
                ("Enterprise", 0.1),
            ],
            summary: &[
                ("Revenue", "$525K"),
                ("Target", "$510K"),
                ("YoY Growth", "12.4%"),
                ("NPS", "48"),
            ],
            insights: &[
                "Closed the quarter $15K ahead of plan with March providing the biggest lift.",
                "Direct and partner channels combined for 70% of bookings—keep enablement funding intact.",
                "Enterprise mix trails at 10%; align with marketing on large-deal pipeline coverage.",
            ],
        },
        QuarterRecord {
            key: "Q2",
            primary: [145000.0, 151000.0, 160500.0, 168000.0],
            comparison: Some([140000.0, 148000.0, 155000.0, 165000.0]),
            segments: &[
                ("Direct", 0.4),
                ("Partners", 0.3),
                ("Self-serve", 0.18),
                ("Enterprise", 0.12),
            ],
            summary: &[
                ("Revenue", "$624K"),
                ("Target", "$608K"),
                ("YoY Growth", "14.8%"),
                ("NPS", "52"),
            ],
            insights: &[
                "Stayed $16.5K above target as conversion efficiency improved mid-quarter.",
                "Partner contribution climbed to 30%; expand the co-selling incentive pilot.",
                "Self-serve momentum dipped slightly—ship activation experiments before Q3.",
            ],
        },
        QuarterRecord {
            key: "Q3",
            primary: [158000.0, 164000.0, 170000.0, 176000.0],
            comparison: Some([150000.0, 158000.0, 165000.0, 172000.0]),
            segments: &[
                ("Direct", 0.42),
                ("Partners", 0.28),
                ("Self-serve", 0.2),
                ("Enterprise", 0.1),
            ],
            summary: &[
                ("Revenue", "$668K"),
                ("Target", "$645K"),
                ("YoY Growth", "15.9%"),
                ("NPS", "55"),
            ],
            insights: &[
                "Outperformed plan by $23K with steady month-over-month gains.",
                "Direct revenue share held at 42%; preserve the spend-efficiency guardrails in place.",
                "Enterprise mix is stuck at 10%—refresh late-stage playbooks with sales ops support.",
            ],
        },
        QuarterRecord {
            key: "Q4",
            primary: [172000.0, 182000.0, 191000.0, 205000.0],
            comparison: Some([165000.0, 175000.0, 184000.0, 198000.0]),
            segments: &[
                ("Direct", 0.38),
                ("Partners", 0.32),
                ("Self-serve", 0.22),
                ("Enterprise", 0.08),
            ],
            summary: &[
                ("Revenue", "$750K"),
                ("Target", "$722K"),
                ("YoY Growth", "18.3%"),
                ("NPS", "58"),
            ],
            insights: &[
                "Ended the year $28K ahead of plan with December bookings spiking 7%.",
                "Partners now represent 32% of mix—confirm capacity for joint marketing heading into Q1.",
                "Self-serve growth at 22% signals pricing-page tweaks are resonating; keep iterating.",
            ],
        },
    ],
};

const MARKETING: Dashboard = Dashboard {
    key: "marketing",
    label: "Pipeline Acceleration",
    description: "Visualize how demand generation programs perform against goal and which initiatives are producing sales-ready pipeline.",
    formatter: FormatterKind::Number,
    cards: CardCopy {
        bar: BarCopy {
            title: "Qualified Leads vs Goal",
            primary_label: "Qualified Leads",
            comparison_label: "Goal",
            aria_label: "Bar chart comparing qualified leads with goal by month",
        },
        line: LineCopy {
            title: "Lead Momentum",
            primary_label: "Qualified Leads",
            aria_label: "Line chart showing qualified lead trajectory",
        },
        doughnut: DoughnutCopy {
            title: "Campaign Mix",
            legend_title: "Leads by campaign source",
            aria_label: "Doughnut chart showing contribution by marketing channel",
        },
        summary: SectionCopy {
            title: "Pipeline Summary",
        },
        insights: SectionCopy {
            title: "Growth Highlights & Plays",
        },
    },
    quarters: &[
        QuarterRecord {
            key: "Q1",
            primary: [410.0, 430.0, 460.0, 495.0],
            comparison: Some([400.0, 420.0, 450.0, 480.0]),
            segments: &[
                ("Content Marketing", 0.33),
                ("Paid Media", 0.27),
                ("Webinars", 0.21),
                ("Lifecycle Email", 0.19),
            ],
            summary: &[
                ("Qualified Leads", "1,795"),
                ("Opportunities Created", "286"),
                ("Pipeline Influenced", "$1.6M"),
                ("Top Campaign", "Product Launch Webinars"),
            ],
            insights: &[
                "Beat the qualified-lead goal by 45 with the March webinar spike providing the lift.",
                "\"Product Launch Webinars\" remain the top source—tighten SDR follow-up scripts to capture momentum.",
                "Lifecycle email now drives 19% of volume; queue nurture experiments targeting expansion cohorts.",
            ],
        },
        QuarterRecord {
            key: "Q2",
            primary: [520.0, 540.0, 580.0, 610.0],
            comparison: Some([500.0, 520.0, 560.0, 590.0]),
            segments: &[
                ("Content Marketing", 0.31),
                ("Paid Media", 0.29),
                ("Webinars", 0.22),
                ("Lifecycle Email", 0.18),
            ],
            summary: &[
                ("Qualified Leads", "2,250"),
                ("Opportunities Created", "344"),
                ("Pipeline Influenced", "$2.1M"),
                ("Top Campaign", "Customer Story Series"),
            ],
            insights: &[
                "Qualified leads outpaced plan by 80 as the customer story series launched.",
                "Paid media share climbed to 29%; monitor CAC before unlocking more spend.",
                "Opportunities at 344 confirm SDR capacity is healthy—plan incremental headcount in Q4.",
            ],
        },
        QuarterRecord {
            key: "Q3",
            primary: [580.0, 610.0, 640.0, 670.0],
            comparison: Some([560.0, 590.0, 620.0, 650.0]),
            segments: &[
                ("Content Marketing", 0.3),
                ("Paid Media", 0.28),
                ("Webinars", 0.23),
                ("Lifecycle Email", 0.19),
            ],
            summary: &[
                ("Qualified Leads", "2,500"),
                ("Opportunities Created", "372"),
                ("Pipeline Influenced", "$2.4M"),
                ("Top Campaign", "Lifecycle Nurture Refresh"),
            ],
            insights: &[
                "Maintained an 80-lead surplus on goal with steady month-to-month growth.",
                "Lifecycle email contributions rose to 19%; keep iterating on personalization tests.",
                "\"Lifecycle Nurture Refresh\" continues to convert—codify it into an evergreen playbook.",
            ],
        },
        QuarterRecord {
            key: "Q4",
            primary: [620.0, 660.0, 690.0, 730.0],
            comparison: Some([600.0, 640.0, 670.0, 710.0]),
            segments: &[
                ("Content Marketing", 0.28),
                ("Paid Media", 0.3),
                ("Webinars", 0.24),
                ("Lifecycle Email", 0.18),
            ],
            summary: &[
                ("Qualified Leads", "2,700"),
                ("Opportunities Created", "398"),
                ("Pipeline Influenced", "$2.7M"),
                ("Top Campaign", "Year-end Upgrade Push"),
            ],
            insights: &[
                "Closed the year 80 leads above goal while sustaining a 24% webinar mix.",
                "Paid media now leads at 30%; validate multi-touch attribution before expanding buys.",
                "\"Year-end Upgrade Push\" is converting well—prep retention follow-ups to protect gains.",
            ],
        },
    ],
};

const PRODUCT: Dashboard = Dashboard {
    key: "product",
    label: "Product Health",
    description: "Monitor activation, engagement, and retention signals to keep product experience investments aligned with customer outcomes.",
    formatter: FormatterKind::Percent,
    cards: CardCopy {
        bar: BarCopy {
            title: "Activation vs Target",
            primary_label: "Activation Rate",
            comparison_label: "Target",
            aria_label: "Bar chart comparing activation rate to target by month",
        },
        line: LineCopy {
            title: "Engagement Trend",
            primary_label: "DAU/MAU",
            aria_label: "Line chart showing engagement trend",
        },
        doughnut: DoughnutCopy {
            title: "Retention Cohorts",
            legend_title: "Retention rate by cohort",
            aria_label: "Doughnut chart showing retention by cohort",
        },
        summary: SectionCopy {
            title: "Product Pulse",
        },
        insights: SectionCopy {
            title: "Product Signals & Experiments",
        },
    },
    quarters: &[
        QuarterRecord {
            key: "Q1",
            primary: [0.52, 0.55, 0.57, 0.59],
            comparison: Some([0.5, 0.52, 0.54, 0.56]),
            segments: &[
                ("New Customers", 0.36),
                ("Expansion", 0.27),
                ("Enterprise", 0.2),
                ("SMB", 0.17),
            ],
            summary: &[
                ("Activation Rate", "59%"),
                ("DAU/MAU", "31%"),
                ("Churn", "3.2%"),
                ("Top Insight", "Expansion cohort adoption beat plan by 8 pts"),
            ],
            insights: &[
                "Activation stayed roughly three points above plan with consistent month-over-month gains.",
                "Expansion users account for 27% of retained activity—lean into upsell nudges and in-product prompts.",
                "Churn at 3.2% highlights enterprise onboarding friction; partner with CX on time-to-value workshops.",
            ],
        },
        QuarterRecord {
            key: "Q2",
            primary: [0.55, 0.58, 0.6, 0.63],
            comparison: Some([0.53, 0.55, 0.57, 0.59]),
            segments: &[
                ("New Customers", 0.34),
                ("Expansion", 0.29),
                ("Enterprise", 0.21),
                ("SMB", 0.16),
            ],
            summary: &[
                ("Activation Rate", "63%"),
                ("DAU/MAU", "34%"),
                ("Churn", "2.9%"),
                ("Top Insight", "Enterprise stickiness grew for third straight month"),
            ],
            insights: &[
                "Activation kept a four-point lead on target as the checklist refresh rolled out.",
                "Enterprise cohort share rose to 21%; prioritize roadmap items that reinforce admin workflows.",
                "Churn dipped to 2.9%—capture qualitative feedback to institutionalize the wins.",
            ],
        },
        QuarterRecord {
            key: "Q3",
            primary: [0.58, 0.61, 0.64, 0.67],
            comparison: Some([0.56, 0.58, 0.61, 0.63]),
            segments: &[
                ("New Customers", 0.32),
                ("Expansion", 0.3),
                ("Enterprise", 0.23),
                ("SMB", 0.15),
            ],
            summary: &[
                ("Activation Rate", "67%"),
                ("DAU/MAU", "36%"),
                ("Churn", "2.6%"),
                ("Top Insight", "Expansion users now outpace new users for logins"),
            ],
            insights: &[
                "Activation remains four points above plan while engagement pushes DAU/MAU to 36%.",
                "Expansion logins now exceed new-user activity—double down on workflow education.",
                "Retention cohorts show enterprise at 23%; explore premium feature packaging before Q4.",
            ],
        },
        QuarterRecord {
            key: "Q4",
            primary: [0.61, 0.64, 0.66, 0.69],
            comparison: Some([0.59, 0.62, 0.64, 0.66]),
            segments: &[
                ("New Customers", 0.31),
                ("Expansion", 0.31),
                ("Enterprise", 0.24),
                ("SMB", 0.14),
            ],
            summary: &[
                ("Activation Rate", "69%"),
                ("DAU/MAU", "38%"),
                ("Churn", "2.4%"),
                ("Top Insight", "Retention cohorts maintain 90-day streak highs"),
            ],
            insights: &[
                "Activation closed the year three points above plan and trending upward.",
                "Expansion and new customers are now evenly split at 31%; design experiments to protect balance.",
                "Churn at 2.4% keeps us ahead of benchmarks—share tactics with support for onboarding playbooks.",
            ],
        },
    ],
};
