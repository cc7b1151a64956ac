//! Turtle parser.
//!
//! Recursive descent over the token stream, emitting to a `GraphSink`.

use cidoc_graph_ir::{Datatype, GraphSink, TermId};
use cidoc_vocab::rdf;
use rustc_hash::FxHashMap;

use crate::error::{Result, TurtleError};
use crate::iri;
use crate::lex::{tokenize, Token, TokenKind};

/// Turtle parser state.
pub struct Parser<'a, S: GraphSink> {
    tokens: Vec<Token>,
    pos: usize,
    sink: &'a mut S,
    base: Option<String>,
    prefixes: FxHashMap<String, String>,
}

impl<'a, S: GraphSink> Parser<'a, S> {
    /// Tokenize `input` and prepare to parse it into `sink`.
    pub fn new(input: &str, sink: &'a mut S) -> Result<Self> {
        Ok(Self {
            tokens: tokenize(input)?,
            pos: 0,
            sink,
            base: None,
            prefixes: FxHashMap::default(),
        })
    }

    /// Parse every statement in the document.
    pub fn parse(mut self) -> Result<()> {
        while !self.at(&TokenKind::Eof) {
            self.statement()?;
        }
        Ok(())
    }

    // =========================================================================
    // Token cursor
    // =========================================================================

    fn current(&self) -> &Token {
        // the lexer always ends the stream with Eof, and bump never passes it
        &self.tokens[self.pos]
    }

    fn bump(&mut self) {
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
    }

    fn at(&self, kind: &TokenKind) -> bool {
        &self.current().kind == kind
    }

    fn expect(&mut self, kind: TokenKind) -> Result<()> {
        if self.at(&kind) {
            self.bump();
            Ok(())
        } else {
            Err(self.unexpected(&format!("expected '{}'", kind)))
        }
    }

    fn unexpected(&self, what: &str) -> TurtleError {
        let token = self.current();
        TurtleError::parse(token.start, format!("{}, found '{}'", what, token.kind))
    }

    // =========================================================================
    // Directives
    // =========================================================================

    fn statement(&mut self) -> Result<()> {
        match self.current().kind.clone() {
            TokenKind::KwPrefix => {
                self.bump();
                self.prefix_decl()?;
                self.expect(TokenKind::Dot)
            }
            TokenKind::KwSparqlPrefix => {
                self.bump();
                self.prefix_decl()
            }
            TokenKind::KwBase => {
                self.bump();
                self.base_decl()?;
                self.expect(TokenKind::Dot)
            }
            TokenKind::KwSparqlBase => {
                self.bump();
                self.base_decl()
            }
            _ => {
                self.triples()?;
                self.expect(TokenKind::Dot)
            }
        }
    }

    fn prefix_decl(&mut self) -> Result<()> {
        let prefix = match &self.current().kind {
            TokenKind::PrefixedName { prefix, local } if local.is_empty() => prefix.to_string(),
            _ => return Err(self.unexpected("expected prefix name")),
        };
        self.bump();

        let namespace = self.iri_ref()?;
        self.sink.declare_prefix(&prefix, &namespace);
        self.prefixes.insert(prefix, namespace);
        Ok(())
    }

    fn base_decl(&mut self) -> Result<()> {
        let base = self.iri_ref()?;
        self.sink.declare_base(&base);
        self.base = Some(base);
        Ok(())
    }

    // =========================================================================
    // Triples
    // =========================================================================

    fn triples(&mut self) -> Result<()> {
        if self.at(&TokenKind::LBracket) {
            let subject = self.blank_node_property_list()?;
            if self.at(&TokenKind::Dot) {
                return Ok(());
            }
            return self.predicate_object_list(subject);
        }

        let subject = match self.current().kind.clone() {
            TokenKind::Iri(_) | TokenKind::PrefixedName { .. } => {
                let iri = self.iri()?;
                self.sink.iri(&iri)
            }
            TokenKind::BlankNodeLabel(label) => {
                self.bump();
                self.sink.blank(Some(&*label))
            }
            TokenKind::LParen => self.collection()?,
            _ => return Err(self.unexpected("expected subject")),
        };
        self.predicate_object_list(subject)
    }

    fn predicate_object_list(&mut self, subject: TermId) -> Result<()> {
        loop {
            let predicate = self.verb()?;
            self.object_list(subject, predicate)?;

            if !self.at(&TokenKind::Semicolon) {
                return Ok(());
            }
            while self.at(&TokenKind::Semicolon) {
                self.bump();
            }
            // trailing `;` before the end of the statement or property list
            if matches!(
                self.current().kind,
                TokenKind::Dot | TokenKind::RBracket | TokenKind::Eof
            ) {
                return Ok(());
            }
        }
    }

    fn verb(&mut self) -> Result<TermId> {
        if self.at(&TokenKind::KwA) {
            self.bump();
            return Ok(self.sink.iri(rdf::TYPE));
        }
        let iri = self.iri()?;
        Ok(self.sink.iri(&iri))
    }

    fn object_list(&mut self, subject: TermId, predicate: TermId) -> Result<()> {
        loop {
            let object = self.object()?;
            self.sink.triple(subject, predicate, object);

            if !self.at(&TokenKind::Comma) {
                return Ok(());
            }
            self.bump();
        }
    }

    fn object(&mut self) -> Result<TermId> {
        match self.current().kind.clone() {
            TokenKind::Iri(_) | TokenKind::PrefixedName { .. } => {
                let iri = self.iri()?;
                Ok(self.sink.iri(&iri))
            }
            TokenKind::BlankNodeLabel(label) => {
                self.bump();
                Ok(self.sink.blank(Some(&*label)))
            }
            TokenKind::LBracket => self.blank_node_property_list(),
            TokenKind::LParen => self.collection(),
            TokenKind::String(value) => {
                self.bump();
                self.string_literal(&value)
            }
            TokenKind::Integer(n) => {
                self.bump();
                Ok(self.sink.literal(&n, Datatype::xsd_integer(), None))
            }
            TokenKind::Decimal(n) => {
                self.bump();
                Ok(self.sink.literal(&n, Datatype::xsd_decimal(), None))
            }
            TokenKind::Double(n) => {
                self.bump();
                Ok(self.sink.literal(&n, Datatype::xsd_double(), None))
            }
            TokenKind::KwTrue => {
                self.bump();
                Ok(self.sink.literal("true", Datatype::xsd_boolean(), None))
            }
            TokenKind::KwFalse => {
                self.bump();
                Ok(self.sink.literal("false", Datatype::xsd_boolean(), None))
            }
            _ => Err(self.unexpected("expected object")),
        }
    }

    /// Language tag or datatype following a string
    fn string_literal(&mut self, value: &str) -> Result<TermId> {
        match self.current().kind.clone() {
            TokenKind::LangTag(tag) => {
                self.bump();
                Ok(self
                    .sink
                    .literal(value, Datatype::rdf_lang_string(), Some(&*tag)))
            }
            TokenKind::DoubleCaret => {
                self.bump();
                let datatype = self.iri()?;
                Ok(self
                    .sink
                    .literal(value, Datatype::from_iri(datatype), None))
            }
            _ => Ok(self.sink.literal(value, Datatype::xsd_string(), None)),
        }
    }

    /// `[ … ]`, possibly empty
    fn blank_node_property_list(&mut self) -> Result<TermId> {
        self.expect(TokenKind::LBracket)?;
        let node = self.sink.blank(None);
        if !self.at(&TokenKind::RBracket) {
            self.predicate_object_list(node)?;
        }
        self.expect(TokenKind::RBracket)?;
        Ok(node)
    }

    /// `( … )` as an rdf:first / rdf:rest chain; `()` is rdf:nil
    fn collection(&mut self) -> Result<TermId> {
        self.expect(TokenKind::LParen)?;
        let mut items = Vec::new();
        while !self.at(&TokenKind::RParen) {
            if self.at(&TokenKind::Eof) {
                return Err(self.unexpected("unterminated collection"));
            }
            items.push(self.object()?);
        }
        self.bump();

        let first = self.sink.iri(rdf::FIRST);
        let rest = self.sink.iri(rdf::REST);
        let mut head = self.sink.iri(rdf::NIL);
        for item in items.into_iter().rev() {
            let node = self.sink.blank(None);
            self.sink.triple(node, first, item);
            self.sink.triple(node, rest, head);
            head = node;
        }
        Ok(head)
    }

    // =========================================================================
    // IRIs
    // =========================================================================

    /// `<…>` only (directives)
    fn iri_ref(&mut self) -> Result<String> {
        match self.current().kind.clone() {
            TokenKind::Iri(reference) => {
                self.bump();
                self.resolve(&reference)
            }
            _ => Err(self.unexpected("expected IRI")),
        }
    }

    /// `<…>` or a prefixed name
    fn iri(&mut self) -> Result<String> {
        match self.current().kind.clone() {
            TokenKind::Iri(reference) => {
                self.bump();
                self.resolve(&reference)
            }
            TokenKind::PrefixedName { prefix, local } => {
                self.bump();
                let namespace = self
                    .prefixes
                    .get(&*prefix)
                    .ok_or_else(|| TurtleError::UndefinedPrefix(prefix.to_string()))?;
                Ok(format!("{}{}", namespace, local))
            }
            _ => Err(self.unexpected("expected IRI")),
        }
    }

    fn resolve(&self, reference: &str) -> Result<String> {
        if iri::is_absolute(reference) {
            return Ok(reference.to_string());
        }
        match &self.base {
            Some(base) => Ok(iri::resolve(base, reference)),
            None => Err(TurtleError::IriResolution(format!(
                "relative IRI <{}> without a base",
                reference
            ))),
        }
    }
}

/// Parse a Turtle document, emitting triples to `sink`.
pub fn parse<S: GraphSink>(input: &str, sink: &mut S) -> Result<()> {
    Parser::new(input, sink)?.parse()
}
