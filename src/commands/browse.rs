//! Interactive browsing session
//!
//! Reads one command per line. The listing view lives for the whole session;
//! a post view (and its comments) lives until `back` or the next `open`.

use anyhow::Result;
use std::io::{BufRead, Write};

use crate::content::markdown::to_text;
use crate::content::Post;
use crate::session::{BlogView, PostView};
use crate::Folio;

const HELP: &str = "\
Commands:
  list                     show posts matching the current filters
  search <text>            set the search text (empty clears it)
  tag <name>               toggle a tag filter
  tags                     show all tags
  clear                    clear search and tag
  open <slug>              open a post
  comment <name> | <text>  comment on the open post
  back                     close the open post
  help                     show this help
  quit                     leave";

/// Run the session until `quit` or end of input
pub fn run<R: BufRead, W: Write>(folio: &Folio, input: R, out: &mut W) -> Result<()> {
    let posts = folio.posts()?;
    let mut session = Session::new(folio, &posts);

    writeln!(out, "Browsing {} posts. Type `help` for commands.", posts.len())?;
    session.print_listing(out)?;

    for line in input.lines() {
        let line = line?;
        if !session.handle(line.trim(), out)? {
            break;
        }
    }

    tracing::debug!("Browse session closed");
    Ok(())
}

struct Session<'a> {
    folio: &'a Folio,
    posts: &'a [Post],
    listing: BlogView<'a>,
    open: Option<PostView<'a>>,
}

impl<'a> Session<'a> {
    fn new(folio: &'a Folio, posts: &'a [Post]) -> Self {
        Self {
            folio,
            posts,
            listing: BlogView::new(posts),
            open: None,
        }
    }

    /// Handle one command; `false` ends the session
    fn handle<W: Write>(&mut self, line: &str, out: &mut W) -> Result<bool> {
        let (command, arg) = match line.split_once(char::is_whitespace) {
            Some((command, arg)) => (command, arg.trim()),
            None => (line, ""),
        };

        match command {
            "" => {}
            "quit" | "exit" => return Ok(false),
            "help" => writeln!(out, "{}", HELP)?,
            "list" => self.print_listing(out)?,
            "search" => {
                self.listing.set_search(arg);
                self.print_listing(out)?;
            }
            "tag" if !arg.is_empty() => {
                self.listing.toggle_tag(arg);
                self.print_listing(out)?;
            }
            "tags" => {
                let tags = self.listing.tags();
                writeln!(out, "Tags: {}", tags.join(", "))?;
            }
            "clear" => {
                self.listing.clear_filters();
                self.print_listing(out)?;
            }
            "open" if !arg.is_empty() => self.open_post(arg, out)?,
            "comment" => self.comment(arg, out)?,
            "back" => {
                self.open = None;
                self.print_listing(out)?;
            }
            _ => writeln!(out, "Unknown command `{}`. Type `help` for commands.", line)?,
        }

        Ok(true)
    }

    fn print_listing<W: Write>(&self, out: &mut W) -> Result<()> {
        let mut filters = Vec::new();
        if !self.listing.search().is_empty() {
            filters.push(format!("search \"{}\"", self.listing.search()));
        }
        if let Some(tag) = self.listing.selected_tag() {
            filters.push(format!("tag {}", tag));
        }
        if !filters.is_empty() {
            writeln!(out, "Filters: {}", filters.join(", "))?;
        }

        if self.listing.is_empty() {
            writeln!(out, "No articles found matching your criteria. Type `clear` to reset.")?;
            return Ok(());
        }
        for post in self.listing.visible_posts() {
            writeln!(out, "  {} - {} [{}]", post.date, post.title, post.slug)?;
        }
        Ok(())
    }

    fn open_post<W: Write>(&mut self, slug: &str, out: &mut W) -> Result<()> {
        match PostView::open(self.posts, slug, &self.folio.config.date_format) {
            Some(view) => {
                writeln!(out, "{}", view.post().title)?;
                write!(out, "{}", to_text(&view.segments()))?;
                writeln!(out, "Comments (0)")?;
                self.open = Some(view);
            }
            None => {
                writeln!(out, "No post with slug `{}`. Back to the listing.", slug)?;
                self.open = None;
                self.print_listing(out)?;
            }
        }
        Ok(())
    }

    fn comment<W: Write>(&mut self, arg: &str, out: &mut W) -> Result<()> {
        let Some(view) = self.open.as_mut() else {
            writeln!(out, "Open a post first.")?;
            return Ok(());
        };

        let (name, body) = arg.split_once('|').unwrap_or((arg, ""));
        view.draft.name = name.trim().to_string();
        view.draft.body = body.trim().to_string();

        match view.submit_comment() {
            Ok(comment) => writeln!(out, "Comment posted by {} on {}.", comment.name, comment.date)?,
            Err(e) => writeln!(out, "Comment not posted: {}", e)?,
        }

        writeln!(out, "Comments ({})", view.comments().len())?;
        for comment in view.comments() {
            writeln!(out, "  {} ({}): {}", comment.name, comment.date, comment.content)?;
        }
        Ok(())
    }
}
