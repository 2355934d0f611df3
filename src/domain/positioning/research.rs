//! Customer research material for Step 2.

use super::questions::{
    answer_or, Answers, COMPANY_DESCRIPTION, COMPANY_NAME, CUSTOMER_DESCRIPTION,
};

/// Returned instead of a report when the session has no answers yet.
pub const NO_RESPONSES_MESSAGE: &str = "No user responses found. Please complete Step 1 first.";

/// Facts the research report is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResearchFacts<'a> {
    pub company_name: &'a str,
    pub company_description: &'a str,
    pub customer_description: &'a str,
}

impl<'a> ResearchFacts<'a> {
    pub fn from_answers(answers: &'a Answers) -> Self {
        Self {
            company_name: answer_or(answers, COMPANY_NAME, "Unknown Company"),
            company_description: answer_or(answers, COMPANY_DESCRIPTION, "Unknown business"),
            customer_description: answer_or(answers, CUSTOMER_DESCRIPTION, "Unknown customers"),
        }
    }
}

/// Builds the structured research-report prompt.
pub fn research_prompt(facts: &ResearchFacts<'_>) -> String {
    format!(
        r#"You are a market research analyst conducting automated competitor research. Based on the following company information, research and identify their ICP, buyers, influencers, and users by analyzing competitor websites and market data.

Company: {}
Business: {}
Current Customers: {}

Conduct comprehensive research and provide detailed insights on:

1. **Ideal Customer Profile (ICP)**:
   - Demographics and firmographics
   - Industry verticals and company sizes
   - Technology stack and preferences
   - Pain points and challenges

2. **Buyer Personas**:
   - Decision makers vs end users
   - Roles and responsibilities
   - Buying journey stages
   - Decision criteria and influence factors

3. **Key Influencers**:
   - Industry thought leaders
   - Internal champions
   - Community advocates
   - Media and analyst relationships

4. **User Personas**:
   - End-user characteristics
   - Usage patterns and behaviors
   - Feature preferences
   - Success metrics

Format your response as a comprehensive research report with clear sections and actionable insights."#,
        facts.company_name, facts.company_description, facts.customer_description,
    )
}

/// Static action plan offered to users who have no persona documents.
pub const RESEARCH_TODO: &str = r#"## **Customer Research Action Plan**

To identify your ICP, buyers, influencers, and users, here's what you need to do:

### 1. **Define Your Ideal Customer Profile (ICP)**
- Identify demographic characteristics (age, location, company size, industry)
- Determine firmographic details (revenue, employee count, technology stack)
- Understand psychographic traits (goals, challenges, pain points)

### 2. **Map Your Buyer Personas**
- Identify decision-makers vs. end-users
- Understand their roles, responsibilities, and influence levels
- Map their buying journey and decision criteria

### 3. **Identify Key Influencers**
- Find industry thought leaders and experts
- Identify internal champions and advocates
- Map influencer networks and communities

### 4. **Research User Personas**
- Understand end-user needs and behaviors
- Identify usage patterns and preferences
- Map user journey and touchpoints

### 5. **Conduct Market Research**
- Analyze competitor customer bases
- Study industry reports and surveys
- Gather insights from customer interviews

Would you like me to conduct automated competitor research to help identify your ICP, buyers, influencers, and users?"#;
