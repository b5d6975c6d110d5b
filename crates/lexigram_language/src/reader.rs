//! Reader for the vocabulary DSL.
//!
//! The reader converts a stream of tokens into [`Form`] trees.

use lexigram_foundation::{Error, Result};

use crate::form::Form;
use crate::lexer::Lexer;
use crate::span::Span;
use crate::token::{Token, TokenKind};

/// Deepest bracket nesting the reader accepts.
pub const MAX_DEPTH: usize = 256;

/// Reader for vocabulary source.
pub struct Reader<'src> {
    /// The lexer providing tokens.
    lexer: Lexer<'src>,
    /// Current token (lookahead).
    current: Token,
    /// Number of sequences currently open.
    depth: usize,
}

impl<'src> Reader<'src> {
    /// Creates a new reader for the given source.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token();
        Self {
            lexer,
            current,
            depth: 0,
        }
    }

    /// Reads a single form from the source.
    ///
    /// # Errors
    /// Returns an error if the source cannot be read.
    pub fn read(&mut self) -> Result<Form> {
        self.skip_trivia();
        self.read_form()
    }

    /// Reads all forms from the source.
    ///
    /// # Errors
    /// Returns an error if the source cannot be read.
    pub fn read_all(&mut self) -> Result<Vec<Form>> {
        let mut forms = Vec::new();
        self.skip_trivia();

        while self.current.kind != TokenKind::Eof {
            forms.push(self.read_form()?);
            self.skip_trivia();
        }

        Ok(forms)
    }

    fn read_form(&mut self) -> Result<Form> {
        self.skip_trivia();

        let span = self.current.span;
        let form = match &self.current.kind {
            TokenKind::Nil => Form::Nil(span),
            TokenKind::True => Form::Bool(true, span),
            TokenKind::False => Form::Bool(false, span),
            TokenKind::Int(n) => Form::Int(*n, span),
            TokenKind::Symbol(name) => Form::Symbol(name.clone(), span),
            TokenKind::Keyword(name) => Form::Keyword(name.clone(), span),
            TokenKind::LParen => {
                return self.read_seq(&TokenKind::RParen, "list", Form::List);
            }
            TokenKind::LBracket => {
                return self.read_seq(&TokenKind::RBracket, "vector", Form::Vector);
            }
            TokenKind::HashBrace => {
                return self.read_seq(&TokenKind::RBrace, "set", Form::Set);
            }
            TokenKind::Eof => return Err(self.error("unexpected end of input")),
            TokenKind::Error(msg) => return Err(self.error(msg)),
            TokenKind::RParen | TokenKind::RBracket | TokenKind::RBrace => {
                return Err(self.error(&format!("unexpected {}", self.current.kind.name())));
            }
            TokenKind::Comment(_) => {
                self.advance();
                return self.read_form();
            }
        };
        self.advance();
        Ok(form)
    }

    /// Reads a delimited sequence; the current token is its opener.
    fn read_seq(
        &mut self,
        close: &TokenKind,
        what: &str,
        make: fn(Vec<Form>, Span) -> Form,
    ) -> Result<Form> {
        if self.depth >= MAX_DEPTH {
            return Err(self.error("nesting too deep"));
        }
        self.depth += 1;
        let result = self.read_elements(close, what, make);
        self.depth -= 1;
        result
    }

    fn read_elements(
        &mut self,
        close: &TokenKind,
        what: &str,
        make: fn(Vec<Form>, Span) -> Form,
    ) -> Result<Form> {
        let start_span = self.current.span;
        self.advance();

        let mut elements = Vec::new();
        self.skip_trivia();

        while &self.current.kind != close {
            if self.current.kind == TokenKind::Eof {
                return Err(self.error_at(start_span, &format!("unterminated {what}")));
            }
            elements.push(self.read_form()?);
            self.skip_trivia();
        }

        let end_span = self.current.span;
        self.advance();

        Ok(make(elements, start_span.to(end_span)))
    }

    fn advance(&mut self) {
        self.current = self.lexer.next_token();
    }

    fn skip_trivia(&mut self) {
        while self.current.kind.is_trivia() {
            self.advance();
        }
    }

    fn error(&self, message: &str) -> Error {
        self.error_at(self.current.span, message)
    }

    #[allow(clippy::unused_self)]
    fn error_at(&self, span: Span, message: &str) -> Error {
        Error::parse(message, span.line, span.column)
    }
}
