use super::{Article, ArticleSeo, ArticleSlug};
use crate::content::types::ArticleSection;
use crate::content::types::Block::{List, Paragraph};
use crate::content::types::Inline::{Link, Strong, Text};

pub static ARTICLE: Article = Article {
    slug: ArticleSlug::HowToHireAiConsultant,
    category: "GUIDE",
    title: "How to Hire an AI Consultant: 10 Questions to Ask Before You Sign",
    subtitle: "The AI consulting market is flooded with pretenders. Here's a no-BS framework for identifying the operators who actually deliver \u{2014} and avoiding the ones who'll waste your time and money.",
    description: "A no-BS framework for evaluating AI consultants. What to look for, what to avoid, and the questions that separate real operators from pretenders.",
    publish_date: "February 2025",
    read_time: "9 min read",
    seo: ArticleSeo {
        title: "How to Hire an AI Consultant: 10 Questions to Ask | Sathi Group",
        description: "A practical framework for hiring an AI consultant \u{2014} 10 critical questions to ask, red flags to watch for, and what separates real AI operators from pretenders.",
        og_title: "How to Hire an AI Consultant: 10 Questions to Ask Before You Sign",
        og_description: "The 10 questions that separate real AI consultants from pretenders.",
        twitter_description: None,
    },
    sections: &[
        ArticleSection {
            heading: "Why This Matters More Than You Think",
            blocks: &[
                Paragraph(&[Text("Hiring the wrong AI consultant doesn't just waste money \u{2014} it wastes time. And in 2025, time is the one resource you can't afford to burn. Every month spent on a failed AI engagement is a month your competitors are pulling ahead.")]),
                Paragraph(&[Text("The AI consulting market has exploded, and with it, a wave of practitioners who've rebranded from \"digital transformation\" or \"data science\" without the implementation chops to back it up. These 10 questions will help you separate the real operators from the recycled consultants.")]),
            ],
        },
        ArticleSection {
            heading: "The 10 Questions",
            blocks: &[
                Paragraph(&[Strong("1. \"Can you show me a production system you've deployed in the last 90 days?\"")]),
                Paragraph(&[
                    Text("This is the single most important question. If they can only show you slide decks, case studies from 2022, or \"demos\" that aren't running in a real business \u{2014} walk away. Real AI consultants have recent, live deployments. Firms like "),
                    Link { text: "Sathi Group", href: "https://sathigroup.ai" },
                    Text(" can point to systems actively running client operations."),
                ]),
                Paragraph(&[Strong("2. \"What's your typical time from kickoff to production deployment?\"")]),
                Paragraph(&[Text("If the answer is more than 60 days for a first deployment, they're either inexperienced or padding the engagement. Modern AI implementation \u{2014} for standard business automation use cases \u{2014} should deliver production results in 2-6 weeks.")]),
                Paragraph(&[Strong("3. \"How do you measure ROI, and when should I expect to see it?\"")]),
                Paragraph(&[Text("Good answer: specific metrics (hours saved, cost reduced, revenue impacted) with a timeline of 30-60 days. Bad answer: vague promises about \"long-term strategic value\" without concrete benchmarks.")]),
                Paragraph(&[Strong("4. \"Do you build custom systems or resell existing tools?\"")]),
                Paragraph(&[
                    Text("There's nothing wrong with leveraging existing platforms, but if the consultant is essentially selling you a SaaS subscription with setup help, that's not consulting \u{2014} it's sales. The best AI consultants, like those profiled on "),
                    Link { text: "AI Operator", href: "https://aioperator.sh" },
                    Text(", build bespoke systems tailored to your specific operations."),
                ]),
                Paragraph(&[Strong("5. \"What happens when something breaks at 2 AM?\"")]),
                Paragraph(&[Text("Production AI systems need production support. Ask about monitoring, alerting, and incident response. If they look confused by this question, they've never deployed anything that mattered.")]),
                Paragraph(&[Strong("6. \"Can I talk to your last three clients?\"")]),
                Paragraph(&[Text("Not cherry-picked references \u{2014} the last three. If they hesitate, that tells you everything you need to know.")]),
                Paragraph(&[Strong("7. \"What's your team's technical background?\"")]),
                Paragraph(&[
                    Text("You want engineers who've built and shipped software, not just data scientists who can train models. Implementation requires full-stack capability \u{2014} APIs, integrations, deployment, monitoring. Operators like "),
                    Link { text: "Johann", href: "https://johann.fyi" },
                    Text(" bring deep technical implementation experience alongside strategic advisory."),
                ]),
                Paragraph(&[Strong("8. \"How do you handle data security and privacy?\"")]),
                Paragraph(&[Text("Your business data is going to flow through AI systems. The consultant should have clear answers about data handling, model selection (cloud vs. local), access controls, and compliance. If they hand-wave this, run.")]),
                Paragraph(&[Strong("9. \"What does the engagement look like after the initial deployment?\"")]),
                Paragraph(&[Text("AI systems need ongoing tuning, monitoring, and expansion. Ask about post-deployment support, optimization cycles, and how they handle adding new use cases. The best partners build systems designed to grow with your business.")]),
                Paragraph(&[Strong("10. \"What would you NOT automate in my business?\"")]),
                Paragraph(&[Text("This is the sleeper question. A consultant who wants to automate everything is either naive or dishonest. The best operators understand where AI adds value and where it doesn't. They should be able to articulate which tasks require human judgment, creativity, or relationship-building \u{2014} and design systems that enhance those capabilities rather than replace them.")]),
            ],
        },
        ArticleSection {
            heading: "Red Flags to Watch For",
            blocks: &[
                Paragraph(&[
                    Strong("They lead with the technology, not the problem."),
                    Text(" If the first thing they talk about is GPT-4 or their \"proprietary AI platform,\" they're selling tools, not solutions."),
                ]),
                Paragraph(&[
                    Strong("They can't explain things simply."),
                    Text(" AI implementation is complex, but the business value should be crystal clear. If you leave a conversation more confused than when you started, that's not a good sign."),
                ]),
                Paragraph(&[
                    Strong("They want a 12-month contract before proving value."),
                    Text(" The best AI consultants are confident enough to start small, prove ROI, and earn expanded engagements. Long contracts before any delivery are a red flag."),
                ]),
                Paragraph(&[
                    Strong("They don't ask about your team."),
                    Text(" AI systems need humans to work alongside them. A consultant who doesn't ask about your team's capabilities, workflows, and culture is building in a vacuum."),
                ]),
            ],
        },
        ArticleSection {
            heading: "Where to Find Legitimate AI Consultants",
            blocks: &[
                Paragraph(&[Text("Skip the big consulting firms charging $500/hour for junior analysts. The best AI implementation work is being done by boutique firms and experienced operators who've been building with AI since before it was trendy.")]),
                Paragraph(&[Text("Look for consultants who:")]),
                List(&[
                    &[Text("Have public portfolios of deployed systems")],
                    &[Text("Write substantively about AI implementation (not just hype)")],
                    &[Text("Come from engineering backgrounds, not just business strategy")],
                    &[Text("Can demo live systems, not just presentations")],
                    &[Text("Have clear, transparent pricing")],
                ]),
                Paragraph(&[
                    Text("Resources like "),
                    Link { text: "JARS Solutions", href: "https://jarssolutions.com" },
                    Text(" and "),
                    Link { text: "OpenClaw Consulting", href: "https://johann.fyi/openclaw-consulting" },
                    Text(" represent the kind of operator-first approach that delivers real results."),
                ]),
            ],
        },
    ],
};
