//! Compiled-in site content and the site hierarchy.
//!
//! Posts are static data: metadata lives here, bodies are Markdown files
//! under `content/` embedded at compile time. Each page declares its own
//! breadcrumb trail from the functions below.
//!
//! ```text
//! /                          หน้าแรก
//! └── /blog                  บทความ
//!     └── /blog/{slug}       post title
//! ```

use crate::breadcrumbs::NavigationTrail;

pub const HOME_LABEL: &str = "หน้าแรก";
pub const HOME_PATH: &str = "/";
pub const BLOG_LABEL: &str = "บทความ";
pub const BLOG_PATH: &str = "/blog";
pub const BLOG_INTRO: &str =
    "รวมบทความเกี่ยวกับการใช้งาน Agent Skills และเทคนิคการพัฒนาซอฟต์แวร์ด้วย AI";

/// A blog article.
#[derive(Debug)]
pub struct BlogPost {
    /// URL segment under `/blog/`.
    pub slug: &'static str,
    pub title: &'static str,
    /// One-line summary shown on the blog index.
    pub description: &'static str,
    /// Intro paragraph under the article heading.
    pub lead: &'static str,
    /// ISO date for `<time datetime>`.
    pub published: &'static str,
    /// Human-readable date (Buddhist calendar).
    pub date_label: &'static str,
    pub read_time: &'static str,
    pub author: &'static str,
    pub author_bio: &'static str,
    /// Markdown body.
    pub body: &'static str,
}

impl BlogPost {
    /// Site-absolute path of the article page.
    pub fn path(&self) -> String {
        format!("{}/{}", BLOG_PATH, self.slug)
    }
}

static POSTS: &[BlogPost] = &[BlogPost {
    slug: "how-to-use-agent-skills",
    title: "วิธีใช้ Agent Skills ใน AntiGravity",
    description: "เรียนรู้วิธีสร้างและใช้งาน Agent Skills เพื่อเพิ่มประสิทธิภาพการพัฒนาซอฟต์แวร์",
    lead: "Agent Skills คือความสามารถพิเศษที่คุณสามารถสอนให้ AI ทำงานเฉพาะทางได้ \
           ในบทความนี้เราจะเรียนรู้วิธีสร้างและใช้งาน Skills เพื่อเพิ่มประสิทธิภาพการพัฒนาซอฟต์แวร์",
    published: "2026-01-30",
    date_label: "30 มกราคม 2569",
    read_time: "8 นาที",
    author: "Learn Agent Skills Team",
    author_bio: "สอนการใช้งาน AI ในการพัฒนาซอฟต์แวร์",
    body: include_str!("../content/how-to-use-agent-skills.md"),
}];

/// All posts, newest first.
pub fn posts() -> &'static [BlogPost] {
    POSTS
}

pub fn find_post(slug: &str) -> Option<&'static BlogPost> {
    POSTS.iter().find(|post| post.slug == slug)
}

/// Trail for the blog index: หน้าแรก / บทความ
pub fn blog_index_trail() -> NavigationTrail {
    NavigationTrail::new()
        .link(HOME_LABEL, HOME_PATH)
        .current(BLOG_LABEL)
}

/// Trail for an article: หน้าแรก / บทความ / title
pub fn article_trail(post: &BlogPost) -> NavigationTrail {
    NavigationTrail::new()
        .link(HOME_LABEL, HOME_PATH)
        .link(BLOG_LABEL, BLOG_PATH)
        .current(post.title)
}

/// A page path paired with the trail it renders.
#[derive(Debug)]
pub struct PageTrail {
    pub path: String,
    pub trail: NavigationTrail,
}

/// Every page that renders breadcrumbs, in site order.
pub fn page_trails() -> Vec<PageTrail> {
    let mut pages = vec![PageTrail {
        path: BLOG_PATH.to_string(),
        trail: blog_index_trail(),
    }];
    pages.extend(posts().iter().map(|post| PageTrail {
        path: post.path(),
        trail: article_trail(post),
    }));
    pages
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breadcrumbs::NavigationStep;

    #[test]
    fn slugs_are_unique() {
        let mut slugs: Vec<&str> = posts().iter().map(|p| p.slug).collect();
        slugs.sort_unstable();
        slugs.dedup();
        assert_eq!(slugs.len(), posts().len());
    }

    #[test]
    fn find_post_by_slug() {
        let post = find_post("how-to-use-agent-skills").unwrap();
        assert_eq!(post.title, "วิธีใช้ Agent Skills ใน AntiGravity");
        assert_eq!(post.path(), "/blog/how-to-use-agent-skills");
        assert!(find_post("missing").is_none());
    }

    #[test]
    fn post_bodies_are_embedded() {
        for post in posts() {
            assert!(!post.body.trim().is_empty(), "{} has no body", post.slug);
        }
    }

    #[test]
    fn article_trail_ends_at_post() {
        let post = find_post("how-to-use-agent-skills").unwrap();
        let trail = article_trail(post);
        assert_eq!(
            trail.steps(),
            &[
                NavigationStep::link("หน้าแรก", "/"),
                NavigationStep::link("บทความ", "/blog"),
                NavigationStep::current("วิธีใช้ Agent Skills ใน AntiGravity"),
            ]
        );
    }

    #[test]
    fn blog_index_trail_ends_at_blog() {
        let trail = blog_index_trail();
        assert_eq!(trail.len(), 2);
        assert!(trail.steps()[1].is_current());
    }

    #[test]
    fn every_page_trail_is_well_formed() {
        let pages = page_trails();
        assert_eq!(pages.len(), posts().len() + 1);
        for page in &pages {
            assert!(page.trail.issues().is_empty(), "{} has issues", page.path);
        }
    }

    #[test]
    fn home_page_has_no_trail() {
        let pages = page_trails();
        assert!(pages.iter().all(|page| page.path != HOME_PATH));
        // Home is the root step of every other trail
        for page in &pages {
            assert_eq!(page.trail.steps()[0], NavigationStep::link(HOME_LABEL, HOME_PATH));
        }
    }
}
