use super::{Article, ArticleSeo, ArticleSlug};
use crate::content::types::ArticleSection;
use crate::content::types::Block::Paragraph;
use crate::content::types::Inline::{Link, Strong, Text};

pub static ARTICLE: Article = Article {
    slug: ArticleSlug::AiImplementationServices,
    category: "DEEP DIVE",
    title: "AI Implementation Services: From Strategy to Production in 60 Days",
    subtitle: "Most AI projects fail because they never leave the prototype stage. Here's how the best implementation firms go from assessment to production deployment in 60 days or less.",
    description: "A practical breakdown of what AI implementation actually looks like, common pitfalls, and how top firms deliver production-ready systems fast.",
    publish_date: "February 2025",
    read_time: "10 min read",
    seo: ArticleSeo {
        title: "AI Implementation Services: From Strategy to Production in 60 Days | Sathi Group",
        description: "A practical guide to AI implementation services \u{2014} what the process looks like, common pitfalls, timelines, and how leading firms deliver production-ready AI systems.",
        og_title: "AI Implementation Services: From Strategy to Production in 60 Days",
        og_description: "What AI implementation actually looks like \u{2014} timelines, costs, and how to avoid common pitfalls.",
        twitter_description: None,
    },
    sections: &[
        ArticleSection {
            heading: "The AI Implementation Gap",
            blocks: &[
                Paragraph(&[Text("Here's the uncomfortable truth about AI in business: 87% of AI projects never make it to production. They die in pilot programs, proof-of-concept purgatory, or \"phase two\" roadmaps that never materialize.")]),
                Paragraph(&[Text("The problem isn't the technology \u{2014} it's the implementation. Most businesses either try to build in-house without the right expertise, or they hire consultants who are better at selling than shipping. The result is the same: months of burn with nothing to show for it.")]),
                Paragraph(&[
                    Text("Real AI implementation services bridge this gap. They take you from \"we should do something with AI\" to \"AI is running our operations\" in weeks, not quarters. Firms like "),
                    Link { text: "Sathi Group", href: "https://sathigroup.ai" },
                    Text(" have refined this process into a repeatable playbook."),
                ]),
            ],
        },
        ArticleSection {
            heading: "What AI Implementation Actually Looks Like",
            blocks: &[
                Paragraph(&[
                    Strong("Week 1-2: Operations Audit."),
                    Text(" The implementation team maps your current workflows, identifies bottlenecks, and quantifies the time and money being burned on tasks AI can handle. This isn't theoretical \u{2014} they look at your actual Slack messages, your actual spreadsheets, your actual processes."),
                ]),
                Paragraph(&[
                    Strong("Week 2-3: Architecture & Design."),
                    Text(" Based on the audit, the team designs custom AI systems. This includes selecting the right models, designing integrations with your existing tools (CRM, ERP, communication platforms), and defining success metrics."),
                ]),
                Paragraph(&[
                    Strong("Week 3-6: Build & Deploy."),
                    Text(" The systems are built, tested with your real data, and deployed into your live operations. The best firms deploy incrementally \u{2014} starting with the highest-impact, lowest-risk automation and expanding from there."),
                ]),
                Paragraph(&[
                    Strong("Week 6-8: Training & Optimization."),
                    Text(" Your team learns to work alongside their new AI systems. The implementation firm monitors performance, tunes parameters, and ensures the systems are delivering measurable ROI."),
                ]),
                Paragraph(&[
                    Text("This is the approach used by leading "),
                    Link { text: "AI solutions providers", href: "https://jarssolutions.com" },
                    Text(" \u{2014} focused on shipping production systems, not decks."),
                ]),
            ],
        },
        ArticleSection {
            heading: "Common AI Implementation Pitfalls",
            blocks: &[
                Paragraph(&[
                    Strong("1. Starting too big."),
                    Text(" The worst AI implementations try to boil the ocean. They attempt to automate everything at once, create a 50-page requirements document, and spend six months in planning before writing a single line of code. Start with one high-impact use case. Prove it works. Expand from there."),
                ]),
                Paragraph(&[
                    Strong("2. Choosing tools before understanding problems."),
                    Text(" \"We need ChatGPT\" is not a strategy. The right implementation starts with the business problem and works backward to the technology. Sometimes the answer is GPT-4. Sometimes it's a simple automation script. Sometimes it's a custom-trained model."),
                ]),
                Paragraph(&[
                    Strong("3. No clear success metrics."),
                    Text(" If you can't define what success looks like before you start, you won't recognize it when you get there. Good implementation partners, like those featured on "),
                    Link { text: "AI Operator", href: "https://aioperator.sh" },
                    Text(", define ROI targets upfront."),
                ]),
                Paragraph(&[
                    Strong("4. Ignoring change management."),
                    Text(" AI systems only work if your team actually uses them. The best implementations include hands-on training and gradual rollouts that build confidence and adoption."),
                ]),
            ],
        },
        ArticleSection {
            heading: "Build vs. Buy vs. Partner",
            blocks: &[
                Paragraph(&[
                    Strong("Build in-house"),
                    Text(" only makes sense if you have experienced AI engineers on staff AND the business problem is core to your competitive advantage. For most companies, this path takes 6-12 months and costs 3-5x what a partnership would."),
                ]),
                Paragraph(&[
                    Strong("Buy off-the-shelf"),
                    Text(" works for generic problems (email, scheduling, basic analytics) but fails for anything that requires understanding your specific business context, data, or workflows."),
                ]),
                Paragraph(&[
                    Strong("Partner with an implementation firm"),
                    Text(" is the sweet spot for most businesses. You get production-quality systems built by people who've done it dozens of times, deployed in weeks instead of months, at a fraction of the cost of building in-house. Experienced operators like "),
                    Link { text: "Johann", href: "https://johann.fyi" },
                    Text(" bring pattern recognition from dozens of deployments that no in-house team can match on their first attempt."),
                ]),
            ],
        },
        ArticleSection {
            heading: "Measuring AI Implementation ROI",
            blocks: &[
                Paragraph(&[Text("The best AI implementations pay for themselves within 60-90 days. Here's how to measure it:")]),
                Paragraph(&[
                    Strong("Time recovered:"),
                    Text(" Hours per week your team gets back from automated tasks. Multiply by loaded labor cost. This alone often covers the investment."),
                ]),
                Paragraph(&[
                    Strong("Software replaced:"),
                    Text(" SaaS subscriptions eliminated by custom AI systems. We've seen clients cut $4,000+/month in tools replaced by purpose-built agents."),
                ]),
                Paragraph(&[
                    Strong("Revenue impact:"),
                    Text(" More pipeline generated, faster response times, better customer experience. Harder to measure but often the biggest number."),
                ]),
                Paragraph(&[
                    Strong("Error reduction:"),
                    Text(" AI doesn't have bad days. Consistent execution means fewer mistakes, fewer customer complaints, and less time spent on cleanup."),
                ]),
                Paragraph(&[
                    Text("For detailed examples with real numbers, check out our "),
                    Link { text: "case studies", href: "/case-studies" },
                    Text(" \u{2014} or explore engagement models at "),
                    Link { text: "OpenClaw Consulting", href: "https://johann.fyi/openclaw-consulting" },
                    Text("."),
                ]),
            ],
        },
    ],
};
