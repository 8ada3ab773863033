/// The checker module rejects reads of undeclared names before execution.
///
/// It walks the syntax tree with a stack of name sets that mirrors the
/// interpreter's frames: one for the program and one per function body.
///
/// # Responsibilities
/// - Pre-declares the builtins in the outermost scope.
/// - Declares assigned names, function names and parameters.
/// - Reports every identifier read that no enclosing scope declares.
pub mod checker;
/// The evaluator module executes the syntax tree.
///
/// The evaluator walks statements in order against a stack of environment
/// frames, evaluates expressions, calls functions and writes program output
/// to the sink it was created with.
///
/// # Responsibilities
/// - Evaluates statements and expressions, including `return` unwinding.
/// - Manages frames for function calls and closures captured by copy.
/// - Reports runtime errors such as unknown names, type mismatches and
///   division by zero.
pub mod evaluator;
/// The lexer module defines the raw tokens of the language.
///
/// A logos-generated lexer recognizes literals, names, keywords, operators,
/// comments and physical line breaks. It knows nothing about indentation.
///
/// # Responsibilities
/// - Recognizes numeric and string literals, decoding string escapes.
/// - Tracks the current line for positions.
pub mod lexer;
/// The parser module builds the syntax tree from tokens.
///
/// A recursive-descent parser with one token of lookahead consumes the
/// token stream, including `Indent`/`Dedent`, and produces a `Program`.
///
/// # Responsibilities
/// - Converts tokens into statements and expressions with positions.
/// - Encodes operator precedence and associativity.
/// - Fails on the first grammar violation with what was expected and found.
pub mod parser;
/// The tokenizer module turns raw tokens into the layout-aware stream.
///
/// It wraps the lexer with the indentation rules: logical newlines,
/// `Indent`/`Dedent` synthesis, implicit line joining inside parentheses and
/// the closing `Eof`.
pub mod tokenizer;
/// The value module defines the runtime data types for evaluation.
///
/// # Responsibilities
/// - Defines the `Value` enum and its display and truthiness rules.
/// - Defines function values with their captured bindings.
pub mod value;
