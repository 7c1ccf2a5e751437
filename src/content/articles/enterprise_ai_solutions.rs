use super::{Article, ArticleSeo, ArticleSlug};
use crate::content::types::ArticleSection;
use crate::content::types::Block::Paragraph;
use crate::content::types::Inline::{Link, Strong, Text};

pub static ARTICLE: Article = Article {
    slug: ArticleSlug::EnterpriseAiSolutions,
    category: "LISTICLE",
    title: "Enterprise AI Solutions: 7 High-ROI Use Cases for 2025",
    subtitle: "Not all AI use cases are created equal. These seven deliver the highest return on investment for mid-market and enterprise companies \u{2014} with real deployment timelines and benchmarks.",
    description: "The most impactful enterprise AI applications \u{2014} from intelligent automation to predictive analytics \u{2014} with real ROI benchmarks.",
    publish_date: "February 2025",
    read_time: "11 min read",
    seo: ArticleSeo {
        title: "Enterprise AI Solutions: 7 High-ROI Use Cases for 2025 | Sathi Group",
        description: "The 7 highest-ROI enterprise AI solutions for 2025 \u{2014} from intelligent automation to predictive analytics, with real benchmarks and implementation guidance.",
        og_title: "Enterprise AI Solutions: 7 High-ROI Use Cases for 2025",
        og_description: "The highest-ROI enterprise AI use cases with real benchmarks and implementation timelines.",
        twitter_description: None,
    },
    sections: &[
        ArticleSection {
            heading: "1. Intelligent Customer Support Automation",
            blocks: &[
                Paragraph(&[
                    Strong("ROI Timeline:"),
                    Text(" 30-45 days. "),
                    Strong("Typical Savings:"),
                    Text(" 60-80% reduction in Tier 1 support costs."),
                ]),
                Paragraph(&[Text("AI-powered customer support isn't chatbots that frustrate your customers with scripted responses. Modern systems understand context, access your knowledge base, and resolve issues with the nuance of a trained support agent \u{2014} in seconds, not hours.")]),
                Paragraph(&[Text("The key difference in 2025: these systems integrate directly with your CRM, order management, and internal tools. They don't just answer questions \u{2014} they take actions. Process refunds, update orders, escalate intelligently, and learn from every interaction.")]),
                Paragraph(&[
                    Text("Companies deploying these systems through firms like "),
                    Link { text: "Sathi Group", href: "https://sathigroup.ai" },
                    Text(" typically see first-response times drop from hours to under 60 seconds, with resolution rates above 70% without human intervention."),
                ]),
            ],
        },
        ArticleSection {
            heading: "2. Automated Lead Generation & Outreach",
            blocks: &[
                Paragraph(&[
                    Strong("ROI Timeline:"),
                    Text(" 14-30 days. "),
                    Strong("Typical Impact:"),
                    Text(" 3-5x pipeline growth."),
                ]),
                Paragraph(&[Text("The old model \u{2014} hiring SDRs at $60K+ each to manually prospect, research, and send templated emails \u{2014} is dying. AI-powered lead generation systems can identify ideal prospects, enrich contact data, craft genuinely personalized outreach, and manage multi-touch sequences at a fraction of the cost.")]),
                Paragraph(&[
                    Text("One "),
                    Link { text: "Sathi Group client", href: "/case-studies" },
                    Text(" grew their outbound pipeline 280% in 90 days while the founder reclaimed 15 hours per week previously spent on manual outreach. The AI's personalization was actually more consistent than manual efforts at scale."),
                ]),
            ],
        },
        ArticleSection {
            heading: "3. Financial Operations & Reporting",
            blocks: &[
                Paragraph(&[
                    Strong("ROI Timeline:"),
                    Text(" 30-60 days. "),
                    Strong("Typical Savings:"),
                    Text(" 20-30 hours/month in accounting time."),
                ]),
                Paragraph(&[Text("Transaction reconciliation, P&L generation, anomaly detection, and financial reporting are perfectly suited for AI automation. These tasks are rule-heavy, data-intensive, and error-prone when done manually \u{2014} exactly the profile where AI excels.")]),
                Paragraph(&[
                    Text("Enterprise AI solutions for finance go beyond basic automation. They provide predictive cash flow modeling, automatic vendor payment optimization, and real-time financial dashboards that update as transactions occur. Leading "),
                    Link { text: "AI solutions firms", href: "https://jarssolutions.com" },
                    Text(" build these as custom integrations with your existing accounting stack."),
                ]),
            ],
        },
        ArticleSection {
            heading: "4. Competitive Intelligence Monitoring",
            blocks: &[
                Paragraph(&[
                    Strong("ROI Timeline:"),
                    Text(" 7-14 days. "),
                    Strong("Typical Impact:"),
                    Text(" Real-time awareness of competitor moves."),
                ]),
                Paragraph(&[Text("Your AI monitors competitor websites, pricing pages, product updates, job postings, and press releases in real time. The moment they change anything \u{2014} you know before their own customers do.")]),
                Paragraph(&[Text("This isn't just web scraping. Modern competitive intelligence AI understands context. It can identify when a competitor is about to launch a new product based on job posting patterns, detect pricing strategy shifts, and summarize the strategic implications for your team in a morning briefing.")]),
            ],
        },
        ArticleSection {
            heading: "5. Content Generation & Marketing Automation",
            blocks: &[
                Paragraph(&[
                    Strong("ROI Timeline:"),
                    Text(" 14-30 days. "),
                    Strong("Typical Impact:"),
                    Text(" 5-10x content output without additional headcount."),
                ]),
                Paragraph(&[Text("Content marketing is essential but resource-intensive. AI content systems trained on your brand voice can produce social media posts, email newsletters, blog drafts, ad copy, and marketing collateral at a pace no human team can match.")]),
                Paragraph(&[
                    Text("The enterprise play here isn't replacing your marketing team \u{2014} it's giving them leverage. A marketing team of 3 with AI support can outproduce a team of 15 without it. The AI handles the production; humans handle strategy and quality control. Platforms like "),
                    Link { text: "AI Operator", href: "https://aioperator.sh" },
                    Text(" track emerging best practices in this space."),
                ]),
            ],
        },
        ArticleSection {
            heading: "6. HR & Recruitment Automation",
            blocks: &[
                Paragraph(&[
                    Strong("ROI Timeline:"),
                    Text(" 30-45 days. "),
                    Strong("Typical Savings:"),
                    Text(" 70% reduction in time-to-hire."),
                ]),
                Paragraph(&[Text("Job descriptions written, posted across platforms, candidates screened, and the top 5% surfaced to hiring managers. The entire recruitment pipeline \u{2014} from requisition to qualified shortlist \u{2014} runs autonomously.")]),
                Paragraph(&[Text("Enterprise AI recruitment systems go further: they analyze hiring patterns to predict attrition, identify internal mobility opportunities, generate onboarding materials, and even conduct initial screening conversations. The result is faster hiring, better candidates, and less burden on your HR team.")]),
            ],
        },
        ArticleSection {
            heading: "7. Operations & Workflow Orchestration",
            blocks: &[
                Paragraph(&[
                    Strong("ROI Timeline:"),
                    Text(" 45-60 days. "),
                    Strong("Typical Impact:"),
                    Text(" 40-60% reduction in operational overhead."),
                ]),
                Paragraph(&[Text("This is the meta-use-case: AI that orchestrates your other AI systems and human workflows. It routes tasks, manages handoffs, escalates exceptions, and ensures nothing falls through the cracks.")]),
                Paragraph(&[
                    Text("For enterprises running multiple AI systems, orchestration is what turns individual automations into a coherent operating system. Expert practitioners like "),
                    Link { text: "Johann", href: "https://johann.fyi" },
                    Text(" design these architectures to be modular and extensible \u{2014} so each new AI agent you deploy makes the entire system more capable."),
                ]),
                Paragraph(&[
                    Text("To explore how these solutions could apply to your business, see engagement models at "),
                    Link { text: "OpenClaw Consulting", href: "https://johann.fyi/openclaw-consulting" },
                    Text("."),
                ]),
            ],
        },
    ],
};
