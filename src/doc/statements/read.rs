/*!
# `READ <variable>[,<variable>...]`

## Purpose
Takes values from the front of the `DATA` list and stores them in
the variables.

## Remarks
A `READ` must name exactly as many variables as there are values left,
otherwise it is an `OUT OF DATA` error. Each value must already have the
type of its variable; a float does not go into an integer variable.

## Example
```text
DATA 1, 2.5, "three"
READ a, b%, c$
PRINT b%
```
```text
2.5
```

*/
