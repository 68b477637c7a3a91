//! `SequenceTree`をテキストのコマンド列で操作する
//!
//! 入力は空白区切りのトークン列で, 次の4種類のコマンドからなる.
//!
//! - `i <index> <value>`: `index`の位置に`value`を挿入する
//! - `r <index>`: `index`の位置の値を削除する
//! - `n <left> <right>`: 閉区間`[left, right]`を反転する
//! - `s <left> <right>` (`q`も可): 閉区間`[left, right]`の和を出力する

use std::{io::Write, num::ParseIntError};

use thiserror::Error as ThisError;
use tracing::{debug, trace};

use crate::sequencetree::SequenceTree;

#[derive(Debug, ThisError)]
pub enum CommandError {
    #[error("unknown opcode `{0}`")]
    UnknownOpcode(String),
    #[error("missing operand for `{opcode}`")]
    MissingOperand { opcode: char },
    #[error("invalid operand `{token}`")]
    InvalidOperand {
        token: String,
        #[source]
        source: ParseIntError,
    },
    #[error("index {index} is out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("invalid range [{left}, {right}] for length {len}")]
    InvalidRange {
        left: usize,
        right: usize,
        len: usize,
    },
    #[error("failed to write output")]
    Io(#[from] std::io::Error),
}

/// 1つのコマンド. 区間は閉区間
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Command {
    Insert { index: usize, value: i64 },
    Remove { index: usize },
    Negate { left: usize, right: usize },
    Sum { left: usize, right: usize },
}

impl Command {
    /// 入力文字列をコマンドの列として読むイテレータを返す
    ///
    /// エラーが起きた後の要素は意味を持たない
    pub fn parse(input: &str) -> impl Iterator<Item = Result<Command, CommandError>> + '_ {
        let mut tokens = input.split_ascii_whitespace();
        std::iter::from_fn(move || {
            let opcode = tokens.next()?;
            Some(Self::parse_one(opcode, &mut tokens))
        })
    }

    fn parse_one<'a>(
        opcode: &str,
        tokens: &mut impl Iterator<Item = &'a str>,
    ) -> Result<Command, CommandError> {
        fn operand<'a, T: std::str::FromStr<Err = ParseIntError>>(
            opcode: char,
            tokens: &mut impl Iterator<Item = &'a str>,
        ) -> Result<T, CommandError> {
            let token = tokens
                .next()
                .ok_or(CommandError::MissingOperand { opcode })?;
            token
                .parse()
                .map_err(|source| CommandError::InvalidOperand {
                    token: token.to_owned(),
                    source,
                })
        }

        Ok(match opcode {
            "i" => Command::Insert {
                index: operand('i', tokens)?,
                value: operand('i', tokens)?,
            },
            "r" => Command::Remove {
                index: operand('r', tokens)?,
            },
            "n" => Command::Negate {
                left: operand('n', tokens)?,
                right: operand('n', tokens)?,
            },
            "s" | "q" => Command::Sum {
                left: operand('s', tokens)?,
                right: operand('s', tokens)?,
            },
            _ => return Err(CommandError::UnknownOpcode(opcode.to_owned())),
        })
    }

    /// コマンドを木に適用する. 和の問い合わせのときだけ`Some`を返す
    ///
    /// 添字は適用前に検査されるので, 範囲外のコマンドで木がpanicすることはない
    pub fn apply(&self, tree: &mut SequenceTree) -> Result<Option<i64>, CommandError> {
        let len = tree.len();
        trace!(command = ?self, len, "applying");
        match *self {
            Command::Insert { index, value } => {
                if index > len {
                    return Err(CommandError::IndexOutOfRange { index, len });
                }
                tree.insert(index, value);
                Ok(None)
            }
            Command::Remove { index } => {
                if index >= len {
                    return Err(CommandError::IndexOutOfRange { index, len });
                }
                let value = tree.remove(index);
                debug!(index, value, "removed");
                Ok(None)
            }
            Command::Negate { left, right } => {
                check_range(left, right, len)?;
                tree.negate(left..=right);
                Ok(None)
            }
            Command::Sum { left, right } => {
                check_range(left, right, len)?;
                let sum = tree.sum(left..=right);
                debug!(left, right, sum, "sum");
                Ok(Some(sum))
            }
        }
    }
}

fn check_range(left: usize, right: usize, len: usize) -> Result<(), CommandError> {
    if left <= right && right < len {
        Ok(())
    } else {
        Err(CommandError::InvalidRange { left, right, len })
    }
}

/// `input`のコマンドを順に空の木に適用し, 和を1行ずつ`output`に書き出す
///
/// `dump`が真のときは各コマンドの後に木の構造も書き出す.
/// 最初のエラーで中断する
pub fn run(
    input: &str,
    mut output: impl Write,
    dump: bool,
) -> Result<SequenceTree, CommandError> {
    let mut tree = SequenceTree::new();
    for (i, command) in Command::parse(input).enumerate() {
        let command = command?;
        if let Some(sum) = command.apply(&mut tree)? {
            writeln!(output, "{sum}")?;
        }
        if dump {
            writeln!(output, "{}", tree.dump())?;
        }
        trace!(step = i, len = tree.len());
    }
    output.flush()?;
    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse() {
        let commands: Vec<_> = Command::parse("i 0 1\ni 1 0 r 0\n  n 0 0\ns 0 0 q 1 1")
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(
            commands,
            vec![
                Command::Insert { index: 0, value: 1 },
                Command::Insert { index: 1, value: 0 },
                Command::Remove { index: 0 },
                Command::Negate { left: 0, right: 0 },
                Command::Sum { left: 0, right: 0 },
                Command::Sum { left: 1, right: 1 },
            ]
        );
    }

    #[test]
    fn parse_errors() {
        let mut it = Command::parse("x 1");
        assert!(matches!(it.next(), Some(Err(CommandError::UnknownOpcode(op))) if op == "x"));

        let mut it = Command::parse("n 1");
        assert!(matches!(
            it.next(),
            Some(Err(CommandError::MissingOperand { opcode: 'n' }))
        ));

        let mut it = Command::parse("r -1");
        assert!(matches!(
            it.next(),
            Some(Err(CommandError::InvalidOperand { token, .. })) if token == "-1"
        ));
    }

    #[test]
    fn apply_checks_indices() {
        let mut tree = SequenceTree::from_vec(vec![1, 0]);
        assert!(matches!(
            Command::Insert { index: 3, value: 1 }.apply(&mut tree),
            Err(CommandError::IndexOutOfRange { index: 3, len: 2 })
        ));
        assert!(matches!(
            Command::Remove { index: 2 }.apply(&mut tree),
            Err(CommandError::IndexOutOfRange { index: 2, len: 2 })
        ));
        assert!(matches!(
            Command::Sum { left: 1, right: 0 }.apply(&mut tree),
            Err(CommandError::InvalidRange { .. })
        ));
        assert!(matches!(
            Command::Negate { left: 0, right: 2 }.apply(&mut tree),
            Err(CommandError::InvalidRange { .. })
        ));
        assert_eq!(tree.to_vec(), vec![1, 0]);
        assert_eq!(
            Command::Sum { left: 0, right: 1 }.apply(&mut tree).unwrap(),
            Some(1)
        );
    }

    #[test]
    fn run_session() {
        let input = "i 0 1 i 1 0 i 2 1 s 0 2 n 0 1 s 0 2 r 1 s 0 1";
        let mut out = Vec::new();
        let tree = run(input, &mut out, false).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "2\n2\n1\n");
        assert_eq!(tree.to_vec(), vec![0, 1]);
    }

    #[test]
    fn run_with_dump() {
        let mut out = Vec::new();
        run("i 0 1 s 0 0", &mut out, true).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "(v=1,c=1,sum=1,-,-)\n1\n(v=1,c=1,sum=1,-,-)\n"
        );
    }

    #[test]
    fn run_stops_at_error() {
        let mut out = Vec::new();
        let err = run("i 0 1 s 0 0 r 5 s 0 0", &mut out, false).unwrap_err();
        assert!(matches!(err, CommandError::IndexOutOfRange { index: 5, len: 1 }));
        assert_eq!(String::from_utf8(out).unwrap(), "1\n");
    }
}
