use super::types::{CostColumn, CostLine, PainPoint, Step};

pub const PAIN_POINTS: &[PainPoint] = &[
    PainPoint {
        title: "Working weekends (again)",
        description: "You started this business for freedom, but you're working more hours than ever. Every day off gets interrupted by 'urgent' tasks.",
    },
    PainPoint {
        title: "Missed follow-ups cost money",
        description: "Hot leads go cold because someone forgot to call back. You know you're losing sales, but tracking everything manually is impossible.",
    },
    PainPoint {
        title: "Hiring headaches",
        description: "Good assistants are expensive and hard to find. Training takes forever, and they still make mistakes or leave for better opportunities.",
    },
    PainPoint {
        title: "Drowning in admin",
        description: "Scheduling, invoicing, follow-ups, customer service\u{2014}it never ends. You spend more time on paperwork than growing your business.",
    },
    PainPoint {
        title: "Nothing happens without you",
        description: "Take a vacation? Ha. The business stops when you stop. Every decision, every task waits for your approval.",
    },
    PainPoint {
        title: "Falling behind competitors",
        description: "Other businesses seem to run smoother, respond faster, and grow quicker. You're working harder but falling behind.",
    },
];

pub const DIGITAL_EMPLOYEE_TASKS: &[&str] = &[
    "Customer follow-ups and appointment reminders",
    "Lead qualification and initial sales conversations",
    "Scheduling and calendar management",
    "Invoice generation and payment follow-ups",
    "Customer service and support tickets",
    "Data entry and record keeping",
    "Email management and responses",
    "Social media posting and engagement",
];

/// Bold lead-in, then the rest of the line.
pub const OUTCOMES: &[(&str, &str)] = &[
    ("40+ hours", " back in your week"),
    ("Zero missed", " follow-ups or opportunities"),
    ("Actually take breaks", " while the business keeps running"),
];

pub const STEPS: &[Step] = &[
    Step {
        number: "01",
        title: "We learn your business",
        description: "Kate spends time understanding your processes, customer interactions, and daily tasks. No forms to fill out\u{2014}just a conversation about how you currently work.",
    },
    Step {
        number: "02",
        title: "We set everything up",
        description: "Our team builds and configures your digital employee to handle your specific needs. You don't touch any technology\u{2014}we handle all the technical setup.",
    },
    Step {
        number: "03",
        title: "Your business runs itself",
        description: "Watch as tasks get done automatically, customers get responses instantly, and you finally have time to focus on growth instead of daily operations.",
    },
];

pub const COST_COMPARISON: [CostColumn; 2] = [
    CostColumn {
        title: "Hiring an Assistant",
        favourable: false,
        lines: &[
            CostLine { label: "Salary (part-time)", value: "$2,500/month" },
            CostLine { label: "Benefits & taxes", value: "$500/month" },
            CostLine { label: "Training time", value: "20+ hours" },
            CostLine { label: "Mistakes & sick days", value: "Ongoing cost" },
        ],
        total: "$3,000+",
    },
    CostColumn {
        title: "Digital Employee",
        favourable: true,
        lines: &[
            CostLine { label: "Setup & configuration", value: "One-time" },
            CostLine { label: "Monthly service", value: "$997/month" },
            CostLine { label: "Training time", value: "0 hours" },
            CostLine { label: "Sick days & mistakes", value: "Never" },
        ],
        total: "$997",
    },
];

pub const SAVINGS_HEADLINE: &str = "Save $2,000+ per month";
pub const SAVINGS_DETAIL: &str = "Plus get back 40+ hours of your time every week. That's time you can spend with family, growing your business, or actually taking a vacation.";
