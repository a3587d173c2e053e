//! Default roster content
//!
//! Every session starts from the same five profiles. Edits stay in the
//! session; export is the only way to keep them.

use indexmap::IndexMap;

use super::{AgentProfile, AgentStatus};

/// The five default agent profiles, in display order.
pub fn default_agents() -> Vec<AgentProfile> {
    vec![newsletter(), social(), news_monitor(), leadgen(), coordinator()]
}

/// Status board for the dashboard, keyed by codename in roster order.
pub fn default_status_board() -> IndexMap<String, AgentStatus> {
    IndexMap::from([
        (
            "SCRIBE".to_string(),
            AgentStatus {
                state: "On Track".to_string(),
                progress: 0.6,
                next_action: "Draft Week 1 newsletter".to_string(),
            },
        ),
        (
            "SPARK".to_string(),
            AgentStatus {
                state: "Needs Assets".to_string(),
                progress: 0.35,
                next_action: "Collect 10 UGC clips".to_string(),
            },
        ),
        (
            "EARLYBIRD".to_string(),
            AgentStatus {
                state: "Ready".to_string(),
                progress: 0.9,
                next_action: "Finalize digest template".to_string(),
            },
        ),
        (
            "MAGNET".to_string(),
            AgentStatus {
                state: "Building".to_string(),
                progress: 0.5,
                next_action: "Design 2 lead magnets".to_string(),
            },
        ),
        (
            "RALLY".to_string(),
            AgentStatus {
                state: "Scouting".to_string(),
                progress: 0.4,
                next_action: "Confirm venue maps".to_string(),
            },
        ),
    ])
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn newsletter() -> AgentProfile {
    AgentProfile {
        name: "Weekly Recruiting Newsletter Writer".to_string(),
        codename: "SCRIBE".to_string(),
        mission: "Create a weekly email newsletter that recruits college to grad students into \
                  officiating. Show the lifestyle, community, training path, and fast ways to \
                  earn paid games."
            .to_string(),
        target_audience: "Young adults from incoming college freshmen to grad students".to_string(),
        value_proposition: "A friendly newsletter that explains how to start, highlights role \
                            models, and shares gigs, training dates, and income examples that \
                            feel real and reachable."
            .to_string(),
        core_tasks: strings(&[
            "Draft one newsletter each week with a clear call to action",
            "Feature a weekly story or spotlight that feels relatable",
            "Add a simple step by step to get certified or game ready",
            "Include two or three near term opportunities and a short FAQ",
            "Deliver content that a fifth grader could understand without dumbing it down",
        ]),
        inputs: strings(&[
            "Editorial calendar themes",
            "Upcoming training, camps, and certification dates",
            "Success stories and quotes",
            "Open roles and sign up links",
            "Brand voice guide",
        ]),
        outputs: strings(&[
            "HTML and plain text newsletter",
            "Subject line and preview text options",
            "One banner line for cross posting on social platforms",
            "UTM tagged links for tracking",
        ]),
        data_sources: strings(&[
            "Internal events and camp calendars",
            "League assignors and partner orgs",
            "BeOfficial website and landing pages",
        ]),
        kpis: strings(&[
            "Open rate and click rate",
            "Number of sign ups and completed interest forms",
            "New officials added to pipeline per week",
        ]),
        guardrails: strings(&[
            "Keep copy positive and clear",
            "No claims about guaranteed earnings",
            "Respect email compliance and unsubscribe rules",
        ]),
        notes: None,
        example_prompts: strings(&[
            "Write a 500 word newsletter that explains the three steps to work paid fall \
             leagues in 30 days. Include one student spotlight and two dates to register.",
            "Draft three subject lines with a playful tone. Keep preview text under 80 \
             characters.",
        ]),
    }
}

fn social() -> AgentProfile {
    AgentProfile {
        name: "Social Media Content Producer".to_string(),
        codename: "SPARK".to_string(),
        mission: "Plan and create platform ready posts for LinkedIn, Instagram, Facebook, \
                  TikTok, and YouTube Shorts that recruit young adults and show the real day in \
                  the life of an official."
            .to_string(),
        target_audience: "College age and grad students on the above platforms".to_string(),
        value_proposition: "Consistent short form content that makes officiating look modern, \
                            social, and rewarding, with a clear way to start."
            .to_string(),
        core_tasks: strings(&[
            "Create a weekly content calendar",
            "Write captions, hooks, and on screen scripts",
            "Suggest b roll and shot lists for quick filming",
            "Resize and format assets per platform",
            "Publish or hand off to a scheduler",
        ]),
        inputs: strings(&[
            "Brand voice, logo, color palette",
            "Footage and photos from games, camps, clinics",
            "Recruiting offers and landing pages",
            "Key dates from the editorial calendar",
        ]),
        outputs: strings(&[
            "7 to 10 short posts per week with captions",
            "Two 30 to 45 second TikTok or Reels scripts per week",
            "One 60 to 90 second YouTube Short per week",
            "Hashtag clusters by platform",
        ]),
        data_sources: strings(&[
            "Internal footage library",
            "User generated content with permission",
            "Trending audio guidelines by platform",
        ]),
        kpis: strings(&[
            "Follows, saves, and shares",
            "Click throughs to sign up pages",
            "Number of interest forms from social",
        ]),
        guardrails: strings(&[
            "No game footage without league permission",
            "Protect minors and follow platform safety rules",
            "Do not disparage other officials or teams",
        ]),
        notes: None,
        example_prompts: strings(&[
            "Write a 20 second TikTok hook that shows how to earn weekend cash reffing youth \
             tournaments. End with a single call to action.",
            "Draft LinkedIn copy that focuses on leadership and conflict resolution skills you \
             build as an official.",
        ]),
    }
}

fn news_monitor() -> AgentProfile {
    AgentProfile {
        name: "Referee News Monitor".to_string(),
        codename: "EARLYBIRD".to_string(),
        mission: "Gather and summarize daily referee industry news and deliver a 5:30 am digest \
                  email with links."
            .to_string(),
        target_audience: "Vernon and BeOfficial leadership".to_string(),
        value_proposition: "One concise morning brief that saves time and keeps strategy current \
                            on rules, safety, tech, and training."
            .to_string(),
        core_tasks: strings(&[
            "Scan key sources and saved searches",
            "Extract three to five high value items",
            "Summarize in plain language with one line why it matters",
            "Package for delivery at 5:30 am Central",
        ]),
        inputs: strings(&[
            "Source list and keywords",
            "Relevance criteria and topics to track",
            "Contact list for delivery",
        ]),
        outputs: strings(&[
            "Daily email brief",
            "Weekly roll up with trends",
            "CSV archive of links and tags",
        ]),
        data_sources: strings(&[
            "referee.com",
            "naso.org",
            "nfhs.org",
            "Saved Google News queries",
        ]),
        kpis: strings(&[
            "Brief sent on time",
            "Number of relevant items per week",
            "Click throughs on links in brief",
        ]),
        guardrails: strings(&[
            "Respect robots.txt and site terms in the future build",
            "Quote snippets only and link out",
            "Avoid paywalled content unless licensed",
        ]),
        notes: Some(
            "Future build can use a news API or polite scraping with caching. Scheduling \
             handled by cron or automation platform."
                .to_string(),
        ),
        example_prompts: strings(&[
            "Summarize the new NFHS guidance on concussion protocols in two sentences and \
             explain how it impacts youth basketball assignors.",
        ]),
    }
}

fn leadgen() -> AgentProfile {
    AgentProfile {
        name: "Email List Builder and Lead Generator".to_string(),
        codename: "MAGNET".to_string(),
        mission: "Grow a qualified email list of college to grad students interested in \
                  officiating and nurture them to sign up."
            .to_string(),
        target_audience: "Students ages 18 to 28 in target schools and cities".to_string(),
        value_proposition: "Lead magnets and landing pages that convert with simple steps to get \
                            on the floor fast."
            .to_string(),
        core_tasks: strings(&[
            "Design landing pages with a two step form",
            "Create two lead magnets such as Starter Guide and Game Day Checklist",
            "Set up tagging and segments by city and sport",
            "Run small budget test campaigns and report",
        ]),
        inputs: strings(&[
            "Email platform access",
            "Brand assets",
            "Offer details and training dates",
        ]),
        outputs: strings(&[
            "List growth report by week",
            "Segmented CSV exports",
            "Two downloadable PDFs as magnets",
        ]),
        data_sources: strings(&[
            "Form submissions",
            "Ad platform metrics",
            "Campus partner lists where allowed",
        ]),
        kpis: strings(&[
            "Subscribers per week",
            "Cost per lead where ads run",
            "Conversion to interest call or training sign up",
        ]),
        guardrails: strings(&[
            "Follow email and privacy laws",
            "Use opt in and provide unsubscribe",
            "No purchasing third party student lists",
        ]),
        notes: None,
        example_prompts: strings(&[
            "Write a landing page hero that promises a first paid game in 30 days with honest \
             language and no hype.",
            "Draft a 2 page Starter Guide outline for new officials with the first three steps \
             to take this week.",
        ]),
    }
}

fn coordinator() -> AgentProfile {
    AgentProfile {
        name: "Tournament Scouting and Day Of Coordinator".to_string(),
        codename: "RALLY".to_string(),
        mission: "Scout tournament sites, collect operations details, and prepare run of show \
                  plans. On event days provide checklists and live rosters so crews are on time \
                  and covered."
            .to_string(),
        target_audience: "Tournament directors, assignors, crew chiefs, and officials".to_string(),
        value_proposition: "A single source of truth for who, where, and when with backups and \
                            escalation paths."
            .to_string(),
        core_tasks: strings(&[
            "Review tournament websites and gather dates, locations, contact info",
            "Build crew rosters and court assignments",
            "Create a run of show timeline and communication tree",
            "Publish a day of dashboard with live status and replacements",
        ]),
        inputs: strings(&[
            "Tournament URLs and PDFs",
            "Referee availability and cert levels",
            "Venue maps and parking notes",
        ]),
        outputs: strings(&[
            "Scouting brief per tournament",
            "Staffing plan and court grid",
            "Day of checklist and escalation plan",
        ]),
        data_sources: strings(&[
            "Public tournament sites",
            "Internal roster database",
            "Maps and traffic tools",
        ]),
        kpis: strings(&[
            "On time start percentage",
            "Coverage rate with no court left unstaffed",
            "Swap resolution time",
        ]),
        guardrails: strings(&[
            "Respect tournament brand and requests",
            "Do not publish personal data outside the team",
            "Confirm last minute changes with site leads",
        ]),
        notes: None,
        example_prompts: strings(&[
            "Extract dates, venue, and contact info from this tournament site and build a one \
             page scouting brief.",
            "Generate a court by court schedule from 8 am to 8 pm with three officials per game \
             and 10 minute changeover windows.",
        ]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_five_seed_agents_with_unique_codenames() {
        let agents = default_agents();
        assert_eq!(agents.len(), 5);

        let codenames: HashSet<&str> = agents.iter().map(|a| a.codename.as_str()).collect();
        assert_eq!(codenames.len(), 5);

        for agent in &agents {
            agent.validate().unwrap();
            assert!(!agent.mission.is_empty());
        }
    }

    #[test]
    fn test_status_board_covers_every_agent() {
        let board = default_status_board();
        for agent in default_agents() {
            let status = board.get(&agent.codename).expect("status entry for every agent");
            assert!((0.0..=1.0).contains(&status.progress));
        }
    }
}
