// Document templates for the render module.
// Placeholders are `{field}` names filled by `render::template::fill`; every other
// brace group is literal LaTeX / HTML.

/// Full LaTeX document. The preamble is constant; only placeholders vary.
pub const LATEX_DOCUMENT_TEMPLATE: &str = r#"% ATS-Optimized Resume
% Generated with ATS Score: {score}/100
% Compatible with Overleaf

\documentclass[11pt,a4paper]{article}
\usepackage[utf8]{inputenc}
\usepackage[T1]{fontenc}
\usepackage[margin=0.75in]{geometry}
\usepackage{enumitem}
\usepackage{hyperref}
\usepackage{fontawesome5}
\setlist{noitemsep, topsep=0pt}

\begin{document}

\begin{center}
    {\Huge \textbf{{name}}}\\
    \vspace{5pt}
    {\Large {title}}\\
    \vspace{10pt}
    \faEnvelope\ {email} \quad
    \faPhone\ {phone} \quad
    \faMapMarker\ {location}\\
    {linkedin_line}
    {github_line}
\end{center}

\section*{Professional Summary}
{summary}

\section*{Work Experience}
{experience}

\section*{Education}
\textbf{{degree}}\\
{university}{grad_year}\\
{gpa_line}

\section*{Skills}
{skills}

\section*{Keywords}
{keywords}

\vfill
\begin{center}
    \footnotesize Generated with ATS-Optimized Resume Builder | ATS Score: {score}/100
\end{center}

\end{document}"#;

/// One work-experience block; starts and ends with a newline.
pub const LATEX_EXPERIENCE_TEMPLATE: &str = r#"
\subsection*{{job_title}}
\textbf{{company}} \hfill {start_date} -- {end_date}
\begin{itemize}
{bullets}
\end{itemize}
"#;

pub const LATEX_BULLET_TEMPLATE: &str = r#"  \item {line}"#;

pub const LATEX_LINKEDIN_TEMPLATE: &str = r#"\faLinkedin\ \href{{url}}{LinkedIn} \quad"#;

pub const LATEX_GITHUB_TEMPLATE: &str = r#"\faGithub\ \href{{url}}{GitHub}"#;

pub const LATEX_GRAD_YEAR_TEMPLATE: &str = r#" \hfill {grad_year}"#;

pub const LATEX_GPA_TEMPLATE: &str = "GPA: {gpa}";

pub const PREVIEW_FOOTER_TEMPLATE: &str =
    "ATS Score: {score}/100 | Generated with ATS-Optimized Resume Builder";

/// HTML fragment for the live preview pane.
pub const PREVIEW_HTML_TEMPLATE: &str = r#"<div class="resume-header">
  <h1>{name}</h1>
  <h3>{title}</h3>
  <div class="contact-line">
    <span class="contact-email">{email}</span>
    <span class="contact-phone">{phone}</span>
    <span class="contact-location">{location}</span>
  </div>
</div>
<section class="resume-summary">
  <h4>Professional Summary</h4>
  <p>{summary}</p>
</section>
{experience}<section class="resume-education">
  <h4>Education</h4>
  <h5>{degree}</h5>
  <p>{university}</p>
</section>
<section class="resume-skills">
  <h4>Skills</h4>
  <p>{skills}</p>
</section>
{keywords}<footer class="resume-footer score-{tier}">
  <small>{footer}</small>
</footer>
"#;

pub const PREVIEW_HTML_EXPERIENCE_TEMPLATE: &str = r#"<section class="resume-experience">
  <h4>Work Experience</h4>
{entries}</section>
"#;

pub const PREVIEW_HTML_ENTRY_TEMPLATE: &str = r#"  <div class="experience-entry">
    <h5>{job_title}</h5>
    <h6>{company} | {start_date} - {end_date}</h6>
    <p>{description}</p>
  </div>
"#;

pub const PREVIEW_HTML_KEYWORDS_TEMPLATE: &str = r#"<section class="resume-keywords">
  <h4>Keywords</h4>
  <p>{keywords}</p>
</section>
"#;

pub const PREVIEW_HTML_SKILL_BADGE: &str = r#"<span class="badge skill">{value}</span>"#;

pub const PREVIEW_HTML_KEYWORD_BADGE: &str = r#"<span class="badge keyword">{value}</span>"#;
