/*!
# `RETURN`

## Purpose
Ends a subroutine.

## Remarks
Execution resumes after the `GOSUB` that started the subroutine.
A `RETURN` with no `GOSUB` waiting is a `RETURN WITHOUT GOSUB` error.
`RETURN` must be the last thing on its line.

*/
