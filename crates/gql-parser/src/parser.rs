use crate::ast::Argument;
use crate::ast::Definition;
use crate::ast::Directive;
use crate::ast::Document;
use crate::ast::Field;
use crate::ast::FragmentDefinition;
use crate::ast::FragmentSpread;
use crate::ast::InlineFragment;
use crate::ast::OperationDefinition;
use crate::ast::OperationType;
use crate::ast::Selection;
use crate::ast::SelectionSet;
use crate::ast::TypeAnnotation;
use crate::ast::Value;
use crate::ast::VariableDefinition;
use crate::classify_number;
use crate::decode_string;
use crate::Location;
use crate::NumberLiteral;
use crate::Scanner;
use crate::SyntaxError;
use crate::SyntaxErrorKind;
use crate::Token;
use crate::TokenKind;
use std::borrow::Cow;

/// The default nesting depth at which parsing gives up; see
/// [`Parser::with_recursion_limit`].
pub const DEFAULT_RECURSION_LIMIT: usize = 64;

/// A recursive-descent parser for GraphQL query documents.
///
/// The parser pulls tokens from a [`Scanner`] with a single token of
/// lookahead: `la` is the token a production is about to consume and `t`
/// the one most recently consumed. Parsing is fail-fast, so the first
/// scan or grammar error aborts the parse and is returned as a located
/// [`SyntaxError`]; there is no error recovery and no partial tree.
///
/// Each parser instance is good for one document:
/// [`parse_document`](Parser::parse_document) consumes the parser. The
/// [`parse`](crate::parse) convenience function wraps the usual
/// construct-and-parse sequence.
///
/// Self-nesting constructs (selection sets, list and input object values,
/// list types) count their depth and fail with a syntax error once the
/// recursion limit is exceeded, keeping deeply-nested hostile input from
/// overflowing the stack.
pub struct Parser<'src> {
    scanner: Scanner<'src>,
    /// The most recently consumed token.
    t: Token<'src>,
    /// The lookahead token.
    la: Token<'src>,
    depth: usize,
    recursion_limit: usize,
}

impl<'src> Parser<'src> {
    /// Creates a parser reading from `scanner`, with the default recursion
    /// limit.
    pub fn new(scanner: Scanner<'src>) -> Self {
        Parser {
            scanner,
            t: placeholder_token(),
            la: placeholder_token(),
            depth: 0,
            recursion_limit: DEFAULT_RECURSION_LIMIT,
        }
    }

    /// Replaces the nesting depth limit. A limit of `n` allows `n` levels
    /// of self-nesting constructs before parsing fails.
    pub fn with_recursion_limit(mut self, limit: usize) -> Self {
        self.recursion_limit = limit;
        self
    }

    /// Reports a non-fatal diagnostic.
    ///
    /// Parsing is fail-fast and collects no diagnostics today; the hook is
    /// kept so lint-style checks layered over the grammar have somewhere to
    /// report to, without committing to a diagnostics format yet.
    pub fn warning(&self, _location: &Location, _message: &str) {}

    /// Parses a complete document, consuming the parser.
    ///
    /// The whole input must be one valid document; trailing tokens after
    /// the last definition are an error.
    pub fn parse_document(mut self) -> Result<Document, SyntaxError> {
        self.bump()?;
        let document = self.document()?;
        self.expect(TokenKind::Eof)?;
        Ok(document)
    }

    // ================================================================
    // Productions
    // ================================================================

    /// `Document := Definition+`
    fn document(&mut self) -> Result<Document, SyntaxError> {
        let mut definitions = vec![self.definition()?];
        while starts_definition(self.la.kind) {
            definitions.push(self.definition()?);
        }
        Ok(Document { definitions })
    }

    /// `Definition := OperationDefinition | FragmentDefinition`
    fn definition(&mut self) -> Result<Definition, SyntaxError> {
        match self.la.kind {
            TokenKind::Query | TokenKind::Mutation | TokenKind::LBrace => {
                Ok(Definition::Operation(self.operation_definition()?))
            }
            TokenKind::Fragment => Ok(Definition::Fragment(self.fragment_definition()?)),
            _ => Err(self.invalid_construct_error("Definition")),
        }
    }

    /// `OperationDefinition := SelectionSet`
    /// `                     | OperationType Name? VariableDefinitions? Directives? SelectionSet`
    ///
    /// The bare-selection-set shorthand parses as an anonymous query.
    fn operation_definition(&mut self) -> Result<OperationDefinition, SyntaxError> {
        match self.la.kind {
            TokenKind::LBrace => Ok(OperationDefinition {
                operation_type: OperationType::Query,
                name: None,
                variable_definitions: Vec::new(),
                directives: Vec::new(),
                selection_set: self.selection_set()?,
            }),
            TokenKind::Query | TokenKind::Mutation => {
                let operation_type = self.operation_type()?;
                let name = if self.la.kind == TokenKind::Name {
                    self.bump()?;
                    Some(self.t.text.to_string())
                } else {
                    None
                };
                let variable_definitions = if self.la.kind == TokenKind::LParen {
                    self.variable_definitions()?
                } else {
                    Vec::new()
                };
                let directives = if self.la.kind == TokenKind::At {
                    self.directives()?
                } else {
                    Vec::new()
                };
                Ok(OperationDefinition {
                    operation_type,
                    name,
                    variable_definitions,
                    directives,
                    selection_set: self.selection_set()?,
                })
            }
            _ => Err(self.invalid_construct_error("OperationDefinition")),
        }
    }

    /// `OperationType := "query" | "mutation"`
    fn operation_type(&mut self) -> Result<OperationType, SyntaxError> {
        match self.la.kind {
            TokenKind::Query => {
                self.bump()?;
                Ok(OperationType::Query)
            }
            TokenKind::Mutation => {
                self.bump()?;
                Ok(OperationType::Mutation)
            }
            _ => Err(self.invalid_construct_error("OperationType")),
        }
    }

    /// `FragmentDefinition := "fragment" Name "on" Name Directives? SelectionSet`
    fn fragment_definition(&mut self) -> Result<FragmentDefinition, SyntaxError> {
        self.expect(TokenKind::Fragment)?;
        self.expect(TokenKind::Name)?;
        let name = self.t.text.to_string();
        self.expect(TokenKind::On)?;
        self.expect(TokenKind::Name)?;
        let type_condition = self.t.text.to_string();
        let directives = if self.la.kind == TokenKind::At {
            self.directives()?
        } else {
            Vec::new()
        };
        Ok(FragmentDefinition {
            name,
            type_condition,
            directives,
            selection_set: self.selection_set()?,
        })
    }

    /// `SelectionSet := "{" Selection+ "}"`
    fn selection_set(&mut self) -> Result<SelectionSet, SyntaxError> {
        self.enter_recursion()?;
        let open_location = self.la.location();
        self.expect(TokenKind::LBrace)?;
        let mut selections = vec![self.selection()?];
        while starts_selection(self.la.kind) {
            selections.push(self.selection()?);
        }
        self.expect_closing(TokenKind::RBrace, open_location, "selection set")?;
        self.exit_recursion();
        Ok(SelectionSet { selections })
    }

    /// `Selection := Field | "..." (FragmentSpread | InlineFragment)`
    ///
    /// A single `...` serves both fragment forms; the token after it
    /// decides which one follows (`on` for an inline fragment, a name for
    /// a spread).
    fn selection(&mut self) -> Result<Selection, SyntaxError> {
        match self.la.kind {
            TokenKind::Name => Ok(Selection::Field(self.field()?)),
            TokenKind::Spread => {
                self.bump()?;
                match self.la.kind {
                    TokenKind::On => Ok(Selection::InlineFragment(self.inline_fragment()?)),
                    TokenKind::Name => Ok(Selection::FragmentSpread(self.fragment_spread()?)),
                    _ => Err(self.invalid_construct_error("Selection")),
                }
            }
            _ => Err(self.invalid_construct_error("Selection")),
        }
    }

    /// `Field := Name (":" Name)? Arguments? Directives? SelectionSet?`
    ///
    /// When the optional `":" Name` part is present, the first name is the
    /// alias and the second the field name.
    fn field(&mut self) -> Result<Field, SyntaxError> {
        self.expect(TokenKind::Name)?;
        let first = self.t.text.to_string();
        let (alias, name) = if self.la.kind == TokenKind::Colon {
            self.bump()?;
            self.expect(TokenKind::Name)?;
            (Some(first), self.t.text.to_string())
        } else {
            (None, first)
        };
        let arguments = if self.la.kind == TokenKind::LParen {
            self.arguments()?
        } else {
            Vec::new()
        };
        let directives = if self.la.kind == TokenKind::At {
            self.directives()?
        } else {
            Vec::new()
        };
        let selection_set = if self.la.kind == TokenKind::LBrace {
            Some(self.selection_set()?)
        } else {
            None
        };
        Ok(Field {
            alias,
            name,
            arguments,
            directives,
            selection_set,
        })
    }

    /// `FragmentSpread := FragmentName Directives?` (after the `...`)
    fn fragment_spread(&mut self) -> Result<FragmentSpread, SyntaxError> {
        self.expect(TokenKind::Name)?;
        let name = self.t.text.to_string();
        let directives = if self.la.kind == TokenKind::At {
            self.directives()?
        } else {
            Vec::new()
        };
        Ok(FragmentSpread { name, directives })
    }

    /// `InlineFragment := "on" Name Directives? SelectionSet` (after the `...`)
    fn inline_fragment(&mut self) -> Result<InlineFragment, SyntaxError> {
        self.expect(TokenKind::On)?;
        self.expect(TokenKind::Name)?;
        let type_condition = Some(self.t.text.to_string());
        let directives = if self.la.kind == TokenKind::At {
            self.directives()?
        } else {
            Vec::new()
        };
        Ok(InlineFragment {
            type_condition,
            directives,
            selection_set: self.selection_set()?,
        })
    }

    /// `Arguments := "(" Argument+ ")"`
    fn arguments(&mut self) -> Result<Vec<Argument>, SyntaxError> {
        let open_location = self.la.location();
        self.expect(TokenKind::LParen)?;
        let mut arguments = vec![self.argument()?];
        while self.la.kind == TokenKind::Name {
            arguments.push(self.argument()?);
        }
        self.expect_closing(TokenKind::RParen, open_location, "argument list")?;
        Ok(arguments)
    }

    /// `Argument := Name ":" Value`
    fn argument(&mut self) -> Result<Argument, SyntaxError> {
        self.expect(TokenKind::Name)?;
        let name = self.t.text.to_string();
        self.expect(TokenKind::Colon)?;
        Ok(Argument {
            name,
            value: self.value()?,
        })
    }

    /// `VariableDefinitions := "(" VariableDefinition+ ")"`
    fn variable_definitions(&mut self) -> Result<Vec<VariableDefinition>, SyntaxError> {
        let open_location = self.la.location();
        self.expect(TokenKind::LParen)?;
        let mut definitions = vec![self.variable_definition()?];
        while self.la.kind == TokenKind::Dollar {
            definitions.push(self.variable_definition()?);
        }
        self.expect_closing(TokenKind::RParen, open_location, "variable definitions")?;
        Ok(definitions)
    }

    /// `VariableDefinition := "$" Name ":" Type ("=" Value)?`
    fn variable_definition(&mut self) -> Result<VariableDefinition, SyntaxError> {
        self.expect(TokenKind::Dollar)?;
        self.expect(TokenKind::Name)?;
        let name = self.t.text.to_string();
        self.expect(TokenKind::Colon)?;
        let var_type = self.type_annotation()?;
        let default_value = if self.la.kind == TokenKind::Equals {
            self.bump()?;
            Some(self.value()?)
        } else {
            None
        };
        Ok(VariableDefinition {
            name,
            var_type,
            default_value,
        })
    }

    /// `Type := Name "!"? | "[" Type "]" "!"?`
    fn type_annotation(&mut self) -> Result<TypeAnnotation, SyntaxError> {
        self.enter_recursion()?;
        let annotation = match self.la.kind {
            TokenKind::Name => {
                self.bump()?;
                let name = self.t.text.to_string();
                TypeAnnotation::Named {
                    name,
                    non_null: self.eat_bang()?,
                }
            }
            TokenKind::LBracket => {
                let open_location = self.la.location();
                self.bump()?;
                let inner = Box::new(self.type_annotation()?);
                self.expect_closing(TokenKind::RBracket, open_location, "list type")?;
                TypeAnnotation::List {
                    inner,
                    non_null: self.eat_bang()?,
                }
            }
            _ => return Err(self.invalid_construct_error("Type")),
        };
        self.exit_recursion();
        Ok(annotation)
    }

    /// Consumes an optional `!`, returning whether one was present.
    fn eat_bang(&mut self) -> Result<bool, SyntaxError> {
        if self.la.kind == TokenKind::Bang {
            self.bump()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// `Directives := Directive+`
    fn directives(&mut self) -> Result<Vec<Directive>, SyntaxError> {
        let mut directives = vec![self.directive()?];
        while self.la.kind == TokenKind::At {
            directives.push(self.directive()?);
        }
        Ok(directives)
    }

    /// `Directive := "@" Name Arguments?`
    fn directive(&mut self) -> Result<Directive, SyntaxError> {
        self.expect(TokenKind::At)?;
        self.expect(TokenKind::Name)?;
        let name = self.t.text.to_string();
        let arguments = if self.la.kind == TokenKind::LParen {
            self.arguments()?
        } else {
            Vec::new()
        };
        Ok(Directive { name, arguments })
    }

    /// `Value := Boolean | Number | String | EnumValue | Variable | List | InputObject`
    ///
    /// `null` is not part of the value grammar; it fails here like any
    /// other unexpected token.
    fn value(&mut self) -> Result<Value, SyntaxError> {
        match self.la.kind {
            TokenKind::True | TokenKind::False => Ok(Value::Bool(self.boolean()?)),
            TokenKind::Number => self.number_value(),
            TokenKind::Str => self.string_value(),
            TokenKind::Name => {
                self.bump()?;
                Ok(Value::Enum(self.t.text.to_string()))
            }
            TokenKind::Dollar => {
                self.bump()?;
                self.expect(TokenKind::Name)?;
                Ok(Value::Variable(self.t.text.to_string()))
            }
            TokenKind::LBracket => self.list_value(),
            TokenKind::LBrace => self.input_object_value(),
            _ => Err(self.invalid_construct_error("Value")),
        }
    }

    /// `Boolean := "true" | "false"`
    fn boolean(&mut self) -> Result<bool, SyntaxError> {
        match self.la.kind {
            TokenKind::True => {
                self.bump()?;
                Ok(true)
            }
            TokenKind::False => {
                self.bump()?;
                Ok(false)
            }
            _ => Err(self.invalid_construct_error("Boolean")),
        }
    }

    /// Consumes a number token and classifies it as an int or a float.
    fn number_value(&mut self) -> Result<Value, SyntaxError> {
        self.expect(TokenKind::Number)?;
        match classify_number(&self.t.text) {
            Ok(NumberLiteral::Int(value)) => Ok(Value::Int(value)),
            Ok(NumberLiteral::Float(value)) => Ok(Value::Float(value)),
            Err(error) => Err(SyntaxError::new(
                format!("invalid number literal `{}`", self.t.text),
                self.t.location(),
                SyntaxErrorKind::InvalidNumberLiteral(error),
            )),
        }
    }

    /// Consumes a string token and decodes its escape sequences.
    fn string_value(&mut self) -> Result<Value, SyntaxError> {
        self.expect(TokenKind::Str)?;
        match decode_string(&self.t.text) {
            Ok(decoded) => Ok(Value::Str(decoded)),
            Err(error) => Err(SyntaxError::new(
                format!("invalid string literal: {error}"),
                self.t.location(),
                SyntaxErrorKind::InvalidStringLiteral(error),
            )),
        }
    }

    /// `List := "[" Value* "]"`
    fn list_value(&mut self) -> Result<Value, SyntaxError> {
        self.enter_recursion()?;
        let open_location = self.la.location();
        self.expect(TokenKind::LBracket)?;
        let mut items = Vec::new();
        while starts_value(self.la.kind) {
            items.push(self.value()?);
        }
        self.expect_closing(TokenKind::RBracket, open_location, "list")?;
        self.exit_recursion();
        Ok(Value::List(items))
    }

    /// `InputObject := "{" (Name ":" Value)+ "}"`
    fn input_object_value(&mut self) -> Result<Value, SyntaxError> {
        self.enter_recursion()?;
        let open_location = self.la.location();
        self.expect(TokenKind::LBrace)?;
        let mut fields = vec![self.input_object_field()?];
        while self.la.kind == TokenKind::Name {
            fields.push(self.input_object_field()?);
        }
        self.expect_closing(TokenKind::RBrace, open_location, "input object")?;
        self.exit_recursion();
        Ok(Value::InputObject(fields))
    }

    fn input_object_field(&mut self) -> Result<(String, Value), SyntaxError> {
        self.expect(TokenKind::Name)?;
        let name = self.t.text.to_string();
        self.expect(TokenKind::Colon)?;
        Ok((name, self.value()?))
    }

    // ================================================================
    // Token plumbing
    // ================================================================

    /// Consumes the lookahead token: `t` becomes the consumed token and a
    /// fresh token is scanned into `la`.
    fn bump(&mut self) -> Result<(), SyntaxError> {
        let next = self.scanner.scan()?;
        self.t = std::mem::replace(&mut self.la, next);
        Ok(())
    }

    /// Consumes the lookahead token if it has the given kind, or fails
    /// with an error at the lookahead's location.
    fn expect(&mut self, kind: TokenKind) -> Result<(), SyntaxError> {
        if self.la.kind == kind {
            self.bump()
        } else {
            Err(self.unexpected_token_error(kind))
        }
    }

    /// Like [`expect`](Parser::expect), with a note pointing back at the
    /// opening delimiter when the closing one is missing.
    fn expect_closing(
        &mut self,
        kind: TokenKind,
        open_location: Location,
        construct: &str,
    ) -> Result<(), SyntaxError> {
        self.expect(kind).map_err(|mut error| {
            error.add_note_at(format!("{construct} opened here"), open_location);
            error
        })
    }

    fn enter_recursion(&mut self) -> Result<(), SyntaxError> {
        self.depth += 1;
        if self.depth > self.recursion_limit {
            return Err(SyntaxError::new(
                format!(
                    "nesting exceeds the recursion limit of {}",
                    self.recursion_limit
                ),
                self.la.location(),
                SyntaxErrorKind::RecursionLimitExceeded {
                    limit: self.recursion_limit,
                },
            ));
        }
        Ok(())
    }

    fn exit_recursion(&mut self) {
        self.depth -= 1;
    }

    // ================================================================
    // Error construction
    // ================================================================

    fn unexpected_token_error(&self, expected: TokenKind) -> SyntaxError {
        let message = format!(
            "expected {}, found {}",
            expected.display_name(),
            self.la.kind.display_name()
        );
        let kind = if self.la.kind == TokenKind::Eof {
            SyntaxErrorKind::UnexpectedEof {
                expected: expected.display_name().to_string(),
            }
        } else {
            SyntaxErrorKind::UnexpectedToken {
                expected: expected.display_name().to_string(),
                found: self.la.kind.display_name().to_string(),
            }
        };
        SyntaxError::new(message, self.la.location(), kind)
    }

    fn invalid_construct_error(&self, construct: &'static str) -> SyntaxError {
        SyntaxError::new(
            format!("invalid {construct}"),
            self.la.location(),
            SyntaxErrorKind::InvalidConstruct { construct },
        )
    }
}

/// The initial value of `t` and `la` before the first token is scanned.
fn placeholder_token<'src>() -> Token<'src> {
    Token {
        kind: TokenKind::Eof,
        text: Cow::Borrowed(""),
        pos: 0,
        char_pos: 0,
        line: 0,
        col: 0,
        origin: None,
        path: None,
    }
}

fn starts_definition(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Query | TokenKind::Mutation | TokenKind::LBrace | TokenKind::Fragment
    )
}

fn starts_selection(kind: TokenKind) -> bool {
    matches!(kind, TokenKind::Name | TokenKind::Spread)
}

fn starts_value(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::True
            | TokenKind::False
            | TokenKind::Number
            | TokenKind::Str
            | TokenKind::Name
            | TokenKind::Dollar
            | TokenKind::LBracket
            | TokenKind::LBrace
    )
}
