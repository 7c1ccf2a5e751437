use super::{Article, ArticleSeo, ArticleSlug};
use crate::content::types::ArticleSection;
use crate::content::types::Block::Paragraph;
use crate::content::types::Inline::{Break, Link, Strong, Text};

pub static ARTICLE: Article = Article {
    slug: ArticleSlug::AiBusinessAutomationCaseStudies,
    category: "CASE STUDIES",
    title: "AI Business Automation: 5 Case Studies That Prove the ROI",
    subtitle: "Theory is cheap. Here are five real businesses that deployed AI automation \u{2014} with the specific numbers, timelines, and implementation details that matter.",
    description: "Real-world case studies of businesses that automated operations with AI \u{2014} with specific numbers, timelines, and lessons learned.",
    publish_date: "February 2025",
    read_time: "13 min read",
    seo: ArticleSeo {
        title: "AI Business Automation: 5 Case Studies That Prove the ROI | Sathi Group",
        description: "Real-world AI business automation case studies with specific numbers, timelines, and lessons learned. See how businesses cut costs and scaled operations with AI.",
        og_title: "AI Business Automation: 5 Case Studies That Prove the ROI",
        og_description: "Real case studies of businesses that automated operations with AI \u{2014} with real numbers.",
        twitter_description: None,
    },
    sections: &[
        ArticleSection {
            heading: "Case Study 1: E-Commerce Brand Cuts $46K in Annual SaaS Spend",
            blocks: &[
                Paragraph(&[
                    Strong("Company:"),
                    Text(" E-commerce brand, $2.4M ARR, 8-person team."),
                    Break,
                    Strong("Timeline:"),
                    Text(" 4 weeks from kickoff to full deployment."),
                    Break,
                    Strong("Result:"),
                    Text(" Monthly software spend dropped from $4,200 to $380."),
                ]),
                Paragraph(&[Text("This founder was managing 14 different SaaS subscriptions \u{2014} CRM, analytics, email marketing, inventory management, customer support, and more. The team spent hours each week just switching between platforms and reconciling data.")]),
                Paragraph(&[
                    Link { text: "Sathi Group", href: "https://sathigroup.ai" },
                    Text(" audited the entire tool stack, identified nine subscriptions that could be replaced with purpose-built AI agents, and deployed custom systems for customer support, inventory forecasting, email campaigns, reporting, and task management."),
                ]),
                Paragraph(&[
                    Strong("The lesson:"),
                    Text(" Most businesses are paying for 10-15 SaaS tools that do 20% of what a custom AI agent could do at 10% of the cost. The ROI isn't incremental \u{2014} it's structural."),
                ]),
                Paragraph(&[
                    Text("Read the "),
                    Link { text: "full case study details", href: "/case-studies" },
                    Text(" on our case studies page."),
                ]),
            ],
        },
        ArticleSection {
            heading: "Case Study 2: Real Estate Agency Closes 40% More Deals",
            blocks: &[
                Paragraph(&[
                    Strong("Company:"),
                    Text(" Real estate agency, 12 agents."),
                    Break,
                    Strong("Timeline:"),
                    Text(" 3 weeks to full deployment."),
                    Break,
                    Strong("Result:"),
                    Text(" 40% increase in closed deals. Administrative time dropped from 12 hours/week to under 3 per agent."),
                ]),
                Paragraph(&[Text("Each agent was manually writing listings, composing follow-ups, preparing market reports, and managing client communication. Senior agents spent 30% of their week on admin instead of closing.")]),
                Paragraph(&[Text("The solution: AI assistants for the entire team, trained on the agency's brand voice and local market data. Auto-generated listing descriptions, personalized follow-up sequences, weekly market reports, and automated client inquiry responses.")]),
                Paragraph(&[
                    Strong("The lesson:"),
                    Text(" AI doesn't replace real estate agents \u{2014} it removes the work that prevents them from selling. The productivity gain isn't theoretical; it shows up directly in closed deals."),
                ]),
            ],
        },
        ArticleSection {
            heading: "Case Study 3: SaaS Founder Reclaims 15 Hours/Week",
            blocks: &[
                Paragraph(&[
                    Strong("Company:"),
                    Text(" B2B SaaS startup, Series A stage."),
                    Break,
                    Strong("Timeline:"),
                    Text(" 2 weeks to full pipeline deployment."),
                    Break,
                    Strong("Result:"),
                    Text(" 280% pipeline growth in 90 days. Founder recovered 15 hours/week."),
                ]),
                Paragraph(&[Text("The founder was personally spending 15 hours every week on lead research and cold outreach \u{2014} manually searching LinkedIn, enriching contacts, writing messages, and tracking responses. Pipeline generation stopped whenever the founder needed to focus on product or fundraising.")]),
                Paragraph(&[
                    Text("The AI-powered pipeline scrapes relevant profiles based on ICP criteria, enriches leads with company data, drafts hyper-personalized outreach, manages multi-touch sequences, and books meetings directly. Practitioners like "),
                    Link { text: "Johann", href: "https://johann.fyi" },
                    Text(" design these systems to run autonomously while maintaining the quality of hand-crafted outreach."),
                ]),
                Paragraph(&[
                    Strong("The lesson:"),
                    Text(" Founder time is the scarcest resource in a startup. Automating outbound doesn't just save time \u{2014} it removes a single point of failure from your revenue engine."),
                ]),
            ],
        },
        ArticleSection {
            heading: "Case Study 4: Marketing Agency Eliminates Reporting Overhead",
            blocks: &[
                Paragraph(&[
                    Strong("Company:"),
                    Text(" Marketing agency, 8 employees, 30+ clients."),
                    Break,
                    Strong("Timeline:"),
                    Text(" 3 weeks to full deployment."),
                    Break,
                    Strong("Result:"),
                    Text(" Two full days of reporting work eliminated. 16 hours/month redirected to billable work."),
                ]),
                Paragraph(&[Text("Client reporting consumed two days per month across the team. Account managers manually pulled data from Google Analytics, Meta Ads, and Shopify for each client, compiled branded decks, and emailed them out. It was the most-hated task in the agency.")]),
                Paragraph(&[
                    Text("The AI reporting system connects to every client's data sources via API, pulls metrics automatically, generates branded PDFs with executive summaries and trend analysis, and emails them with personalized commentary. Resources like "),
                    Link { text: "AI Operator", href: "https://aioperator.sh" },
                    Text(" track how agencies are leveraging these approaches."),
                ]),
                Paragraph(&[
                    Strong("The lesson:"),
                    Text(" The highest-ROI automations often aren't the sexy ones. Eliminating a dreaded recurring task doesn't just save time \u{2014} it improves team morale and retention."),
                ]),
            ],
        },
        ArticleSection {
            heading: "Case Study 5: Solo Attorney Replaces $1,800/Month VA",
            blocks: &[
                Paragraph(&[
                    Strong("Company:"),
                    Text(" Solo law practice."),
                    Break,
                    Strong("Timeline:"),
                    Text(" 2 weeks to deployment."),
                    Break,
                    Strong("Result:"),
                    Text(" Monthly cost dropped from $1,800 to $79 in API fees. Response times improved from hours to minutes."),
                ]),
                Paragraph(&[Text("A solo attorney was paying $1,800/month for a virtual assistant handling scheduling, intake, document prep, and correspondence. The VA was competent but slow, worked limited hours, and still required significant oversight.")]),
                Paragraph(&[Text("AI systems replaced 90% of the VA's tasks: intelligent scheduling, automated intake forms, document preparation trained on the firm's templates, and email drafting for routine correspondence. The attorney retained the VA at reduced hours for the 10% requiring human judgment.")]),
                Paragraph(&[
                    Strong("The lesson:"),
                    Text(" AI doesn't have to replace humans entirely. The highest-value implementation often automates 80-90% of a role's tasks while keeping humans for judgment calls. The result: dramatically lower costs with equal or better quality. Explore similar engagement models at "),
                    Link { text: "JARS Solutions", href: "https://jarssolutions.com" },
                    Text(" and "),
                    Link { text: "OpenClaw Consulting", href: "https://johann.fyi/openclaw-consulting" },
                    Text("."),
                ]),
            ],
        },
        ArticleSection {
            heading: "Patterns Across All Five Case Studies",
            blocks: &[
                Paragraph(&[Text("Every successful AI automation engagement we've seen shares these characteristics:")]),
                Paragraph(&[
                    Strong("Fast time-to-value."),
                    Text(" All five deployments were live within 2-4 weeks. None required months of planning or enterprise procurement cycles."),
                ]),
                Paragraph(&[
                    Strong("Measurable ROI from day one."),
                    Text(" Not \"strategic value\" or \"long-term positioning\" \u{2014} actual dollars saved, hours recovered, and revenue generated."),
                ]),
                Paragraph(&[
                    Strong("Augmentation over replacement."),
                    Text(" In every case, AI amplified human capability rather than eliminating roles entirely. The team got more done, not smaller."),
                ]),
                Paragraph(&[
                    Strong("Custom over off-the-shelf."),
                    Text(" Generic SaaS tools didn't cut it. Each deployment required systems built for that specific business's data, workflows, and requirements."),
                ]),
                Paragraph(&[Text("If these patterns resonate with your business, the next step is a focused consultation to identify your highest-impact AI opportunities.")]),
            ],
        },
    ],
};
