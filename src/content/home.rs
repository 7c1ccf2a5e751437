use super::types::{Inline, Service, Step, TeamMember, Tier, UseCase};

pub const SERVICES: &[Service] = &[
    Service {
        title: "AI Strategy & Coaching",
        description: "One-on-one advisory that cuts through the noise. We assess your operations, identify the highest-leverage AI opportunities, and build a roadmap tailored to your business.",
    },
    Service {
        title: "Custom AI Implementation",
        description: "Purpose-built AI agents and automation systems deployed directly into your workflow. Not demos \u{2014} working infrastructure that delivers measurable ROI from day one.",
    },
    Service {
        title: "Team Training & Enablement",
        description: "Transform your team from AI-curious to AI-native. In-person or virtual programs that embed AI fluency into your company culture and daily operations.",
    },
];

pub const USE_CASES: &[UseCase] = &[
    UseCase {
        title: "Customer support",
        description: "Agents that read your knowledge base, take actions in your CRM, and resolve most first-line tickets in under a minute.",
    },
    UseCase {
        title: "Lead generation & outreach",
        description: "Prospect research, enrichment, and genuinely personal multi-touch sequences that book meetings straight into your calendar.",
    },
    UseCase {
        title: "Financial operations",
        description: "Reconciliation, anomaly detection, and reporting that update as transactions land instead of at month end.",
    },
    UseCase {
        title: "Competitive intelligence",
        description: "Continuous monitoring of competitor pricing, launches, and hiring, summarized into a morning briefing for your team.",
    },
    UseCase {
        title: "Content & marketing",
        description: "Newsletters, social posts, and ad copy trained on your brand voice, with humans keeping strategy and quality control.",
    },
    UseCase {
        title: "Operations orchestration",
        description: "Routing, handoffs, and exception escalation across your people and AI systems so nothing falls through the cracks.",
    },
];

pub const STEPS: &[Step] = &[
    Step {
        number: "01",
        title: "Consultation",
        description: "A focused conversation to understand your business, identify AI opportunities, and determine the highest-impact starting point.",
    },
    Step {
        number: "02",
        title: "Implementation",
        description: "We build and deploy custom AI systems directly into your operations \u{2014} coaching your team through every step of the integration.",
    },
    Step {
        number: "03",
        title: "Transformation",
        description: "Your organization emerges AI-native. Faster decisions, lower costs, compounding advantage. The gap works in your favor now.",
    },
];

pub const TIERS: &[Tier] = &[
    Tier {
        label: "Individuals & Operators",
        description: &[Inline::Text(
            "Founders, executives, and independent professionals who want to personally harness AI \u{2014} with a dedicated coach and custom-built AI systems tailored to your workflow.",
        )],
    },
    Tier {
        label: "Growth Companies",
        description: &[
            Inline::Text("Teams under 25 people ready to embed AI across their operations. In-person or virtual training, multiple custom AI deployments, and "),
            Inline::Strong("60 days of strategic support"),
            Inline::Text("."),
        ],
    },
    Tier {
        label: "Enterprise",
        description: &[Inline::Text(
            "Large organizations requiring full-scale AI transformation. Comprehensive strategy, deployment, training, and ongoing advisory at the highest level.",
        )],
    },
];

pub const TEAM: &[TeamMember] = &[
    TeamMember {
        name: "Johann Sathianathen",
        role: "AI Architect & Co-Founder",
        bio: "Built and sold multiple companies before turning 21. Deep technical background in AI systems architecture, with a track record of turning complex technology into operational advantage for businesses across industries.",
    },
    TeamMember {
        name: "Darien K. Smith",
        role: "Sales Strategist & Co-Founder",
        bio: "Sales strategist and LinkedIn thought leader with a proven ability to build high-performance revenue engines. Brings the commercial acumen and go-to-market expertise that ensures AI investments translate directly to business growth.",
    },
];
