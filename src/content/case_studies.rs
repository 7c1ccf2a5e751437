use super::types::{CaseStudy, Stat};

pub const CASE_STUDIES: &[CaseStudy] = &[
    CaseStudy {
        label: "E-COMMERCE",
        headline: "E-Commerce Brand \u{2014} $2.4M ARR",
        problem: "The founder was managing 14 different SaaS subscriptions \u{2014} CRM, analytics, email marketing, inventory management, customer support, scheduling, and more. Monthly software spend had ballooned to $4,200, and the team was spending hours each week just switching between platforms and reconciling data across them.",
        solution: "We audited their entire tool stack, identified nine subscriptions that could be replaced with purpose-built AI agents, and deployed custom systems for customer support triage, inventory forecasting, email campaign generation, reporting dashboards, and internal task management. Each agent was trained on their specific data and integrated directly into their existing workflow.",
        result: "Monthly software spend dropped from $4,200 to $380. Annual savings of $45,840. The team reclaimed roughly 20 hours per week previously lost to tool-switching and manual data reconciliation.",
        quote: "We didn\u{2019}t just save money \u{2014} we got better tools. The AI agents actually understand our business. Our old SaaS stack never did.",
        attribution: "Founder & CEO",
    },
    CaseStudy {
        label: "REAL ESTATE",
        headline: "Real Estate Agency \u{2014} 12 Agents",
        problem: "Each of the agency\u{2019}s twelve agents was manually writing listing descriptions, composing follow-up emails, preparing market comparison reports, and managing client communication. Senior agents were spending 30% of their week on administrative tasks instead of closing deals.",
        solution: "We deployed AI assistants for the entire team \u{2014} each trained on the agency\u{2019}s brand voice, local market data, and MLS integrations. The system auto-generates listing descriptions from property data, drafts personalized follow-up sequences, produces weekly market reports, and handles initial client inquiry responses.",
        result: "Average agent productivity increased 3x. The agency closed 40% more deals in Q1 without adding a single hire. Administrative time per agent dropped from 12 hours/week to under 3.",
        quote: "My agents used to dread paperwork. Now they show up and sell. The AI handles everything else. We\u{2019}ve never had a quarter like this.",
        attribution: "Managing Broker",
    },
    CaseStudy {
        label: "B2B SAAS",
        headline: "B2B SaaS Startup \u{2014} Series A",
        problem: "The founder was personally spending 15 hours every week on lead research and cold outreach \u{2014} manually searching LinkedIn, enriching contact data, writing personalized messages, and tracking responses. Pipeline generation was entirely dependent on the founder\u{2019}s time, which meant it stopped whenever they had to focus on product or fundraising.",
        solution: "We built an AI-powered lead generation pipeline that scrapes relevant LinkedIn profiles based on custom ICP criteria, enriches leads with company data and technographic signals, drafts hyper-personalized outreach messages, manages multi-touch sequences, and books qualified meetings directly into the founder\u{2019}s calendar.",
        result: "The founder reclaimed 15 hours per week. Outbound pipeline grew 280% in 90 days. Meeting-to-opportunity conversion improved because the AI\u{2019}s personalization was more consistent than the founder\u{2019}s manual efforts at scale.",
        quote: "I went from spending half my week on outreach to spending zero. Pipeline didn\u{2019}t just survive \u{2014} it tripled. I wish we\u{2019}d done this a year ago.",
        attribution: "Founder & CEO",
    },
    CaseStudy {
        label: "MARKETING",
        headline: "Marketing Agency \u{2014} 8 Employees",
        problem: "Client reporting consumed two full days per month across the team. Account managers were manually logging into Google Analytics, Meta Ads Manager, and Shopify dashboards for each client, pulling screenshots, compiling data into branded slide decks, and emailing them out. It was the single most-hated task in the agency.",
        solution: "We deployed an AI reporting system that connects to every client\u{2019}s data sources via API, automatically pulls performance metrics on a configurable schedule, generates branded PDF reports with executive summaries and trend analysis, and emails them directly to clients with personalized commentary.",
        result: "Two days of reporting work reduced to zero manual effort. Reports are now more accurate, more consistent, and delivered on time every month. The team redirected 16 hours/month into billable client work.",
        quote: "Reporting used to be our worst week of the month. Now it happens automatically and the clients actually like the reports better. We look more professional with less effort.",
        attribution: "Agency Director",
    },
    CaseStudy {
        label: "LEGAL",
        headline: "Law Firm \u{2014} Solo Practitioner",
        problem: "A solo attorney was paying $1,800/month for a virtual assistant to manage scheduling, client intake forms, document preparation, and basic correspondence. The VA was competent but slow, worked limited hours, and still required significant oversight and correction.",
        solution: "We replaced 90% of the VA\u{2019}s tasks with AI systems: an intelligent scheduling agent that handles booking, rescheduling, and reminders; an intake system that collects and organizes client information before consultations; a document preparation assistant trained on the firm\u{2019}s templates; and an email drafting system for routine correspondence.",
        result: "Monthly cost dropped from $1,800 to $79 in API fees. Response times improved from hours to minutes. The attorney retained the VA for the remaining 10% of tasks that require human judgment, at significantly reduced hours.",
        quote: "I was skeptical. I\u{2019}d tried \u{2018}AI tools\u{2019} before and they were toys. This is different. It actually runs my practice. I\u{2019}m a better lawyer now because I spend my time on law, not logistics.",
        attribution: "Principal Attorney",
    },
    CaseStudy {
        label: "HOSPITALITY",
        headline: "Restaurant Group \u{2014} 4 Locations",
        problem: "Inventory ordering, staff scheduling, and online review management were manual nightmares across all four locations. The operations manager was spending 25+ hours per week on spreadsheets, phone calls with suppliers, and copy-pasting responses to Google and Yelp reviews. Inventory waste was running at 18%.",
        solution: "We deployed three integrated AI systems: a predictive inventory agent that forecasts needs based on historical sales data, seasonal patterns, and upcoming events; a scheduling optimizer that builds shift plans based on projected traffic and staff preferences; and a review response agent that monitors all platforms and crafts thoughtful, on-brand responses within hours of each review.",
        result: "Inventory waste dropped from 18% to 7%. Labor costs decreased 12% through smarter scheduling. Every Google and Yelp review now receives a response within 4 hours. The ops manager reclaimed 20 hours per week.",
        quote: "Running four restaurants is chaos. It\u{2019}s still chaos \u{2014} but now I have an AI operations team handling the parts that used to keep me up at night. The inventory savings alone paid for the entire engagement in month one.",
        attribution: "Operations Director",
    },
];

pub const HEADLINE_STATS: &[Stat] = &[
    Stat { value: 45_840, prefix: "$", suffix: "", label: "saved per year on software" },
    Stat { value: 280, prefix: "", suffix: "%", label: "outbound pipeline growth" },
    Stat { value: 40, prefix: "", suffix: "%", label: "more deals closed in Q1" },
    Stat { value: 20, prefix: "", suffix: "h", label: "reclaimed every week" },
];
