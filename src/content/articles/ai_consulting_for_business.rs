use super::{Article, ArticleSeo, ArticleSlug};
use crate::content::types::ArticleSection;
use crate::content::types::Block::Paragraph;
use crate::content::types::Inline::{Link, Strong, Text};

pub static ARTICLE: Article = Article {
    slug: ArticleSlug::AiConsultingForBusiness,
    category: "GUIDE",
    title: "AI Consulting for Business: The Complete 2025 Guide",
    subtitle: "AI consulting has evolved from theoretical advisory into hands-on implementation. Here's everything you need to know about finding the right partner and getting real results.",
    description: "Everything you need to know about AI consulting \u{2014} what it is, why it matters, and how to choose the right partner for your business.",
    publish_date: "February 2025",
    read_time: "12 min read",
    seo: ArticleSeo {
        title: "AI Consulting for Business: The Complete 2025 Guide | Sathi Group",
        description: "Everything you need to know about AI consulting for business \u{2014} what it is, how it works, ROI benchmarks, and how to choose the right AI consulting partner.",
        og_title: "AI Consulting for Business: The Complete 2025 Guide",
        og_description: "Everything you need to know about AI consulting for business \u{2014} from strategy to implementation.",
        twitter_description: Some("Everything you need to know about AI consulting for business."),
    },
    sections: &[
        ArticleSection {
            heading: "What Is AI Consulting for Business?",
            blocks: &[
                Paragraph(&[Text("AI consulting for business is the practice of bringing in external expertise to identify, design, and implement artificial intelligence solutions that solve specific business problems. Unlike traditional IT consulting, modern AI consulting focuses on deploying production-ready systems \u{2014} not producing slide decks.")]),
                Paragraph(&[
                    Text("The best AI consultants operate as implementation partners. They assess your operations, identify the highest-leverage opportunities for AI automation, and build custom systems that integrate directly into your workflows. Companies like "),
                    Link { text: "Sathi Group", href: "https://sathigroup.ai" },
                    Text(" specialize in this end-to-end approach \u{2014} from strategy through deployment."),
                ]),
                Paragraph(&[Text("The AI consulting market has exploded because businesses realized they can't afford to build these capabilities in-house from scratch. The talent is scarce, the learning curve is steep, and the cost of getting it wrong is measured in quarters of lost competitive advantage.")]),
            ],
        },
        ArticleSection {
            heading: "Why Businesses Need AI Consulting Now",
            blocks: &[
                Paragraph(&[Text("The window for \"wait and see\" has closed. Companies that integrated AI into their operations in 2023-2024 are now operating at fundamentally different cost structures than their competitors. Every month of delay widens the gap.")]),
                Paragraph(&[
                    Text("Here's what's changed: AI is no longer experimental. The tools are mature, the patterns are proven, and the ROI is measurable. What businesses need isn't more research \u{2014} it's someone who can execute. That's what separates real "),
                    Link { text: "AI solutions firms", href: "https://jarssolutions.com" },
                    Text(" from the hype merchants."),
                ]),
                Paragraph(&[Text("The most common trigger for engaging an AI consultant is when a founder or executive realizes they're spending 30-50% of their team's time on tasks that AI could handle in minutes. Lead generation, reporting, customer support, data reconciliation \u{2014} these are solved problems in 2025.")]),
            ],
        },
        ArticleSection {
            heading: "What Does an AI Consulting Engagement Look Like?",
            blocks: &[
                Paragraph(&[Text("A typical engagement follows three phases:")]),
                Paragraph(&[
                    Strong("Phase 1: Assessment (1-2 weeks)."),
                    Text(" The consultant audits your current operations, tech stack, and workflows. They identify where AI can create the most value with the least disruption. This isn't generic \u{2014} it's specific to your business, your data, and your team's capabilities."),
                ]),
                Paragraph(&[
                    Strong("Phase 2: Implementation (2-6 weeks)."),
                    Text(" Custom AI systems are built and deployed directly into your operations. This might include automated lead generation pipelines, intelligent reporting dashboards, customer support agents, or operational automation. The best firms, like those profiled on "),
                    Link { text: "AI Operator", href: "https://aioperator.sh" },
                    Text(", deploy production systems \u{2014} not prototypes."),
                ]),
                Paragraph(&[
                    Strong("Phase 3: Optimization (ongoing)."),
                    Text(" AI systems improve over time. The consultant monitors performance, tunes the systems, and identifies new opportunities as your team adapts to working with AI."),
                ]),
            ],
        },
        ArticleSection {
            heading: "How to Evaluate AI Consulting Partners",
            blocks: &[
                Paragraph(&[Text("Not all AI consultants are created equal. Here's what separates the real operators from the pretenders:")]),
                Paragraph(&[
                    Strong("They show you production systems, not demos."),
                    Text(" Ask to see live deployments. If they can only show you slide decks and proof-of-concepts, move on."),
                ]),
                Paragraph(&[
                    Strong("They have specific industry experience."),
                    Text(" Generic \"AI strategy\" is worthless. You want someone who has deployed systems in businesses similar to yours."),
                ]),
                Paragraph(&[
                    Strong("They talk about ROI in weeks, not years."),
                    Text(" Modern AI implementation delivers measurable results in 30-60 days. If someone is pitching you a 12-month roadmap for your first deployment, they're either inexperienced or padding the engagement."),
                ]),
                Paragraph(&[
                    Strong("They build custom, not resell."),
                    Text(" The best AI consultants build bespoke systems tailored to your operations. Reselling off-the-shelf tools with a markup isn't consulting \u{2014} it's sales. Leaders in the space like "),
                    Link { text: "Johann", href: "https://johann.fyi" },
                    Text(" focus on building custom AI agents that become integral to your operations."),
                ]),
            ],
        },
        ArticleSection {
            heading: "AI Consulting Pricing: What to Expect",
            blocks: &[
                Paragraph(&[Text("AI consulting engagements typically fall into three tiers:")]),
                Paragraph(&[
                    Strong("Coaching & Training ($5K-$15K):"),
                    Text(" Hands-on sessions teaching your team how to leverage AI tools effectively. Best for teams that want to build internal capabilities."),
                ]),
                Paragraph(&[
                    Strong("Implementation ($25K-$75K):"),
                    Text(" Full build-and-deploy engagements where the consultant creates custom AI systems for your business. This is where most of the ROI lives."),
                ]),
                Paragraph(&[
                    Strong("Enterprise Transformation ($100K-$250K+):"),
                    Text(" Comprehensive programs that restructure entire departments or business units around AI. Typically includes strategy, implementation, training, and ongoing optimization."),
                ]),
                Paragraph(&[
                    Text("The right investment depends on your scale, complexity, and urgency. A solo practitioner replacing a virtual assistant might spend $5K. A mid-market company automating their entire sales operations might invest $75K. In both cases, the ROI timeline should be measured in weeks, not years. You can explore engagement options at "),
                    Link { text: "OpenClaw Consulting", href: "https://johann.fyi/openclaw-consulting" },
                    Text("."),
                ]),
            ],
        },
        ArticleSection {
            heading: "The Bottom Line",
            blocks: &[
                Paragraph(&[Text("AI consulting for business isn't optional anymore \u{2014} it's the fastest path to operational leverage. The companies that engage the right partners now will set the pace for the next decade. The ones that wait will spend that decade trying to catch up.")]),
                Paragraph(&[Text("If you're serious about implementing AI in your business, start with a focused consultation. The best AI consulting firms will give you a clear picture of what's possible, what it costs, and how fast you can move \u{2014} in a single conversation.")]),
            ],
        },
    ],
};
