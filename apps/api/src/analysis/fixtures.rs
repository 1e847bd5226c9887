//! Shared résumé / job-description fixtures for tests.

pub const SAMPLE_JD: &str = "We are seeking a Senior Full-Stack Engineer proficient in JavaScript/TypeScript, React, Node.js, and AWS. Experience with microservices, REST/GraphQL APIs, PostgreSQL, CI/CD, Docker, and Kubernetes is required. Nice to have: Redis, MongoDB, Terraform. Strong communication skills and the ability to deliver high-quality software in an agile environment.\n";

/// A résumé that satisfies every structural, contact and formatting rule.
pub fn strong_resume() -> String {
    let filler = vec![
        "Collaborated with product and design partners to ship reliable customer facing features every quarter.";
        40
    ]
    .join(" ");

    format!(
        "Jane Doe
jane@example.com | +1 555-123-4567 | https://github.com/janedoe | https://janedoe.dev

Summary
Backend engineer focused on reliable distributed systems.

Skills
Rust, Python, PostgreSQL, AWS, Docker, Kubernetes, React, Node.js, CI/CD

Experience
Senior Engineer, Acme Corp, Jan 2021 - Present
- Led migration of 12 services to Kubernetes, cutting hosting costs by 30%.
- Built a Rust ingestion pipeline handling 2,000,000 events per day.
- Designed PostgreSQL schemas for the billing platform.
- Optimized React dashboards, improving load time by 45%.
- Automated AWS deployments with Docker and CI/CD.
{filler}

Engineer, Initech, Mar 2018 - Dec 2020
- Developed internal tooling in Python.

Education
BSc Computer Science, State University, 2014 - 2018

Projects
Open-source contributor to several Rust crates.
"
    )
}

/// Plain prose with no headings, bullets, dates, contact details or numbers.
pub const WEAK_RESUME: &str = "I am a hard working person who likes computers and wants a job in software.";
