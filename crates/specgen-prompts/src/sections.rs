/// Required document sections, in output order, with the hint given to the model.
pub const SECTIONS: [(&str, &str); 13] = [
    ("Project Overview", "Brief description, goals, target audience"),
    ("Functional Requirements", "Core features and functionality"),
    ("Non-Functional Requirements", "Performance, security, scalability"),
    ("User Roles & Permissions", "Different user types and their access levels"),
    ("Technical Stack Recommendations", "Suggested technologies"),
    ("API Specifications", "Key endpoints and data structures (if applicable)"),
    ("Database Schema Overview", "Main entities and relationships"),
    ("UI/UX Guidelines", "Design principles and key screens"),
    ("Integration Requirements", "Third-party services and APIs"),
    ("Testing Requirements", "Test coverage and strategies"),
    ("Deployment & Infrastructure", "Hosting and deployment considerations"),
    ("Timeline & Milestones", "Suggested project phases"),
    ("Risks & Mitigations", "Potential challenges and solutions"),
];

/// Append the numbered section list to the system prompt.
pub fn append_sections(prompt: &mut String) {
    prompt.push_str("Generate a well-structured technical specification with the following sections:\n\n");
    for (i, (name, hint)) in SECTIONS.iter().enumerate() {
        prompt.push_str(&format!("{}. **{name}** - {hint}\n", i + 1));
    }
}
